pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod interactive;
pub mod logger;
pub mod output;
pub mod pagination;

pub use error::*;
pub use interactive::{prompt_input, prompt_yes_no};
pub use output::{print_success, OutputStyle};
