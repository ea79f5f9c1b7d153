// URL and embedding utilities
pub mod url_builder;
pub mod query_string;
pub mod script_json;

pub use url_builder::absolute_url;
pub use query_string::build_query_string;
pub use script_json::script_safe_json;
