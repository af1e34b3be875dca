mod file_source;
mod stdin_source;

pub use file_source::FileResourceSource;
pub use stdin_source::StdinResourceSource;
