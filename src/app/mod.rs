pub mod console;
pub mod labels;

pub use console::OutputFormat;
pub use labels::Locale;
