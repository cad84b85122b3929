pub mod list;
pub mod plan;
pub mod show;
pub mod targets;

pub use list::list_command;
pub use plan::plan_command;
pub use show::show_command;
pub use targets::targets_command;
