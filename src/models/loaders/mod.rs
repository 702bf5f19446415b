pub mod url_list;

pub use url_list::{load_url_file, resolve_url_inputs};
