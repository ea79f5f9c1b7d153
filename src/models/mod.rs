pub mod app_state;
pub mod build;
pub mod buildroot_override;
pub mod current_user;
pub mod release_stats;
pub mod request_context;
pub mod update;
pub mod user_profile;
pub mod view_model;

pub use app_state::AppState;
pub use build::Build;
pub use buildroot_override::BuildrootOverride;
pub use current_user::CurrentUser;
pub use release_stats::ReleaseStats;
pub use request_context::RequestContext;
pub use update::Update;
pub use user_profile::UserProfile;
pub use view_model::ViewModel;
