#[macro_use]
extern crate rocket;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::services::catalog_service::CatalogStore;
use crate::services::sitemap_service::SitemapCache;
use rocket::{Build, Rocket};

/// Shared, read-only request state. Only the sitemap cache has interior mutability.
pub struct AppState {
    pub catalog: CatalogStore,
    pub site_name: String,
    pub default_origin: String,
    pub page_size: usize,
    pub related_limit: usize,
    pub sitemap_cache: SitemapCache,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![api::serve_sitemap])
        .mount("/api/videos", routes![api::search_videos, api::get_video])
        .mount("/api/categories", routes![api::list_categories])
}
