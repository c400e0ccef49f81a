use crate::utils::{format_clock_duration, format_compact_count};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated catalog entry. Built only through `CatalogStore` ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel: String,
    pub category: String,
    pub tags: Vec<String>,
    pub duration_seconds: u32,
    pub views: u64,
    pub likes: u64,
    pub dislikes: u64,
    pub channel_subscribers: u64,
    pub upload_date: DateTime<Utc>,
    pub thumbnail_url: String,
    pub channel_avatar_url: String,
    pub embed_url: Option<String>,
}

/// Ingestion shape of a video, duration still in clock form ("3:33", "1:00:00").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVideo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub duration: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
    #[serde(default)]
    pub channel_subscribers: u64,
    pub upload_date: DateTime<Utc>,
    pub thumbnail_url: String,
    pub channel_avatar_url: String,
    #[serde(default)]
    pub embed_url: Option<String>,
}

/// On-disk catalog format accepted by `CatalogStore::load_json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<String>,
    pub videos: Vec<RawVideo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Recency,
    Popularity,
    Likes,
    DurationDesc,
}

impl SortKey {
    pub fn key(&self) -> &'static str {
        match self {
            SortKey::Recency => "recency",
            SortKey::Popularity => "popularity",
            SortKey::Likes => "likes",
            SortKey::DurationDesc => "duration",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "recency" => Some(SortKey::Recency),
            "popularity" => Some(SortKey::Popularity),
            "likes" => Some(SortKey::Likes),
            "duration" => Some(SortKey::DurationDesc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` is the wildcard, anything else is an exact category name.
    pub fn from_param(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_key: SortKey,
    pub page: usize, // 1-based
    pub page_size: usize,
}

impl QueryState {
    pub fn first_page(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            sort_key: SortKey::default(),
            page: 1,
            page_size,
        }
    }
}

/// Card-sized view of a video with the display strings the catalog grid shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub channel_avatar_url: String,
    pub category: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub views: String,
    pub likes: String,
    pub upload_date: DateTime<Utc>,
    pub has_embed: bool,
}

impl From<&VideoRecord> for VideoCard {
    fn from(video: &VideoRecord) -> Self {
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            channel: video.channel.clone(),
            channel_avatar_url: video.channel_avatar_url.clone(),
            category: video.category.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            duration: format_clock_duration(video.duration_seconds),
            views: format_compact_count(video.views),
            likes: format_compact_count(video.likes),
            upload_date: video.upload_date,
            has_embed: video.embed_url.is_some(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<VideoCard>,
    pub total_matched: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct VideoDetail {
    pub video: VideoRecord,
    pub card: VideoCard,
    pub subscribers: String,
    pub dislikes: String,
    pub related: Vec<VideoCard>,
    pub meta: MetaTagSet,
}

/// `scheme://host` of the current request, resolved from forwarding headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOrigin(pub String);

/// Site identity used when building absolute URLs and document titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub site_name: String,
    pub base_url: String,
}

/// Document metadata for one video page. Applying it to a live document is
/// left to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTagSet {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_type: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub og_video: Option<String>,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
    pub structured_data: serde_json::Value,
}
