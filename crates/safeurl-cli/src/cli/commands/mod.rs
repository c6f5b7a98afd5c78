//! CLI command handlers. Each writes its results to the given writer.

mod check;
mod completions;
mod href;
mod man;
mod sanitize;

pub use check::run_check;
pub use completions::run_completions;
pub use href::run_href;
pub use man::run_man;
pub use sanitize::{run_sanitize, SanitizeOptions};
