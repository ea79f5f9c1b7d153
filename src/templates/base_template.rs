use crate::models::ViewModel;

/// Common properties of page bodies rendered inside the layout.
pub trait PageTemplate: askama::Template {
    /// Route name used for navigation highlighting.
    fn route_name(&self) -> &'static str;

    /// The subject the menu widget is seeded with.
    fn view_model(&self) -> ViewModel {
        ViewModel::None
    }
}

/// Macro to implement PageTemplate for a body template with no subject
#[macro_export]
macro_rules! impl_page_template {
    ($struct_name:ty, $route:expr) => {
        impl $crate::templates::PageTemplate for $struct_name {
            fn route_name(&self) -> &'static str {
                $route
            }
        }
    };
}
