pub mod console;
pub mod validate;

pub use console::Console;
pub use validate::{parse_count, parse_grade, parse_name};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed while waiting for: {prompt}")]
    UnexpectedEof { prompt: String },
}
