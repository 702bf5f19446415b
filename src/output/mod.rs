pub mod emitter;
pub mod filename;

pub use emitter::{
    prepare_output_dir, write_html_report, write_json_report, write_pdf_report,
};
pub use filename::{output_path, report_file_name, sanitize_url};
