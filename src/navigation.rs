use crate::models::RequestContext;
use crate::settings::{Settings, FMN_URL};
use crate::utils::build_query_string;

/// Route names the navigation bar knows about.
pub mod route {
    pub const HOME: &str = "home";
    pub const USER: &str = "user";
    pub const NEW_UPDATE: &str = "new_update";
    pub const NEW_OVERRIDE: &str = "new_override";
    pub const NEW_STACK: &str = "new_stack";
    pub const METRICS: &str = "metrics";
}

/// Whether the navigation item for `candidate` corresponds to the current page.
pub fn is_active(current_route: &str, candidate_route: &str) -> bool {
    current_route == candidate_route
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

impl NavLink {
    fn new(label: &'static str, href: impl Into<String>, active: bool) -> Self {
        Self {
            label,
            href: href.into(),
            active,
        }
    }
}

/// Navigation bar state for one request, resolved before template expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Links only an authenticated user sees. Empty for anonymous requests.
    pub user_links: Vec<NavLink>,
    pub metrics: NavLink,
    /// Login or Logout.
    pub session: NavLink,
}

impl Navigation {
    pub fn build(request: &RequestContext, settings: &Settings) -> Self {
        let current = request.route_name.as_str();

        let (user_links, session) = match &request.user {
            Some(user) => {
                let viewing_own_profile = is_active(current, route::USER)
                    && request.param("name") == Some(user.name.as_str());

                let mut links = vec![NavLink::new(
                    "Profile",
                    format!("users/{}", urlencoding::encode(&user.name)),
                    viewing_own_profile,
                )];
                if let Some(fmn_url) = settings.get(FMN_URL) {
                    let openid = user.openid(settings.openid_template());
                    links.push(NavLink::new("Alerts", format!("{}{}", fmn_url, openid), false));
                }
                links.push(NavLink::new(
                    "Update",
                    "updates/new",
                    is_active(current, route::NEW_UPDATE),
                ));
                links.push(NavLink::new(
                    "Override",
                    "overrides/new",
                    is_active(current, route::NEW_OVERRIDE),
                ));
                links.push(NavLink::new(
                    "Stacks",
                    "stacks/new",
                    is_active(current, route::NEW_STACK),
                ));

                (links, NavLink::new("Logout", "logout", false))
            }
            None => {
                let query = build_query_string(&[("came_from".to_string(), request.url.clone())]);
                (Vec::new(), NavLink::new("Login", format!("login?{}", query), false))
            }
        };

        Self {
            user_links,
            metrics: NavLink::new("Metrics", "metrics", is_active(current, route::METRICS)),
            session,
        }
    }

    pub fn link(&self, label: &str) -> Option<&NavLink> {
        self.user_links
            .iter()
            .chain([&self.metrics, &self.session])
            .find(|link| link.label == label)
    }
}
