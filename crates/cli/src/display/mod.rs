pub mod formatter;

pub use formatter::render_descriptors;
