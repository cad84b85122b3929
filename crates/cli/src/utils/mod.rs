pub mod parser;

pub use parser::parse_target_list;
