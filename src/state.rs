// state.rs
use crate::config::SiteConfig;
use crate::domain::ProjectsCoordinator;
use crate::listings::{FallbackProvider, ListingSource};
use std::sync::Arc;

/// Shared by every request handler for the lifetime of the server.
pub struct AppState {
    pub config: SiteConfig,
    pub projects: ProjectsCoordinator,
}

impl AppState {
    pub fn new(config: SiteConfig, source: Arc<dyn ListingSource>) -> Self {
        let fallback = FallbackProvider::new(config.listing.profile_url())
            .with_site_url(config.listing.site_url.clone());
        let projects = ProjectsCoordinator::new(config.listing.owner.trim(), source, fallback);

        Self { config, projects }
    }

    pub fn profile_url(&self) -> String {
        self.config.listing.profile_url()
    }
}
