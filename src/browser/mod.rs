pub mod headless;
pub mod pdf;

pub use headless::{launch_audit_browser, SharedBrowser};
pub use pdf::render_report_pdf;
