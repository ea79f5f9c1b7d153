// Page body trait
pub mod base_template;
pub use base_template::PageTemplate;

// Document shell
pub mod layout_template;
pub use layout_template::LayoutTemplate;

// Page bodies
pub mod coming_soon_template;
pub mod home_template;
pub mod metrics_template;
pub mod user_template;

pub use coming_soon_template::ComingSoonTemplate;
pub use home_template::HomeTemplate;
pub use metrics_template::MetricsTemplate;
pub use user_template::UserTemplate;
