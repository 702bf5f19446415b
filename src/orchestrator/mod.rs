pub mod batch_runner;
pub mod url_processor;

pub use batch_runner::{App, RunStats};
pub use url_processor::process_url;
