use backend::models::RawVideo;
use backend::services::catalog_service::CatalogStore;
use backend::services::sitemap_service::SitemapCache;
use backend::{build_rocket, AppState};
use chrono::{TimeZone, Utc};
use rocket::local::blocking::Client;

pub fn raw_video(id: &str, category: &str, views: u64, month: u32) -> RawVideo {
    RawVideo {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: format!("Description of {id}"),
        channel: "Music Vibes".to_string(),
        category: category.to_string(),
        tags: vec![],
        duration: "3:33".to_string(),
        views,
        likes: views / 10,
        dislikes: 5,
        channel_subscribers: 1_800_000,
        upload_date: Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap(),
        thumbnail_url: "/placeholder.svg".to_string(),
        channel_avatar_url: "/placeholder.svg".to_string(),
        embed_url: None,
    }
}

/// A, B (Music) and C (Gaming) plus a Comedy video with markup in its title.
pub fn fixture_catalog() -> CatalogStore {
    let mut tricky = raw_video("D", "Comedy", 50, 4);
    tricky.title = r#"Tom & Jerry's "Show" <Live>"#.to_string();
    tricky.tags = vec!["cartoon".to_string(), "classic".to_string()];
    tricky.embed_url = Some("https://www.youtube.com/embed/xyz".to_string());

    CatalogStore::from_raw(
        vec![
            "Music".to_string(),
            "Gaming".to_string(),
            "Comedy".to_string(),
        ],
        vec![
            raw_video("A", "Music", 100, 1),
            raw_video("B", "Music", 300, 3),
            raw_video("C", "Gaming", 200, 2),
            tricky,
        ],
    )
    .expect("fixture catalog is valid")
}

pub fn client_with(page_size: usize, default_origin: &str) -> Client {
    let state = AppState {
        catalog: fixture_catalog(),
        site_name: "VideoHub".to_string(),
        default_origin: default_origin.to_string(),
        page_size,
        related_limit: 5,
        sitemap_cache: SitemapCache::new(),
    };
    Client::tracked(build_rocket(state)).expect("valid rocket instance")
}

pub fn client_with_page_size(page_size: usize) -> Client {
    client_with(page_size, "https://videohub.test")
}

pub fn client() -> Client {
    client_with_page_size(10)
}
