//! Interactive terminal front end of the worker.
pub mod prompt;

pub use prompt::run_prompt;
