use std::sync::Arc;

use crate::models::ReleaseStats;
use crate::shell::PageShell;

#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<PageShell>,
    /// Header the upstream identity layer puts the authenticated user name in.
    pub user_header: String,
    pub release_stats: Arc<Vec<ReleaseStats>>,
}

impl AppState {
    pub fn new(shell: PageShell, user_header: impl Into<String>) -> Self {
        Self {
            shell: Arc::new(shell),
            user_header: user_header.into(),
            release_stats: Arc::new(Vec::new()),
        }
    }

    pub fn with_release_stats(mut self, stats: Vec<ReleaseStats>) -> Self {
        self.release_stats = Arc::new(stats);
        self
    }
}
