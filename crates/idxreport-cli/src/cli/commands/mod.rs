//! CLI command handlers. Each command is in its own file.

mod categories;
mod duplicates;
mod redirects;
mod report;

pub use categories::run_categories;
pub use duplicates::run_duplicates;
pub use redirects::run_redirects;
pub use report::run_report;
