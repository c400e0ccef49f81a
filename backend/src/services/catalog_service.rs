use crate::error::CatalogError;
use crate::models::{CatalogFile, RawVideo, VideoRecord};
use crate::services::sample_data;
use crate::utils::{is_xml_char, parse_clock_duration};
use chrono::Utc;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Immutable, validated set of videos shared by every request.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    categories: Vec<String>,
    videos: Vec<VideoRecord>,
    index: HashMap<String, usize>,
}

/// Build the sample catalog from a seed. Called once by the entry point.
pub fn init_catalog(seed: u64, size: usize) -> Result<CatalogStore, CatalogError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let raw_videos = sample_data::generate_videos(&mut rng, size, Utc::now());
    info!("Generated {} sample videos (seed {seed})", raw_videos.len());
    CatalogStore::from_raw(sample_data::category_names(), raw_videos)
}

impl CatalogStore {
    pub fn from_raw(
        categories: Vec<String>,
        raw_videos: Vec<RawVideo>,
    ) -> Result<Self, CatalogError> {
        let known: HashSet<&str> = categories.iter().map(String::as_str).collect();
        let mut videos = Vec::with_capacity(raw_videos.len());
        let mut index = HashMap::with_capacity(raw_videos.len());

        for raw in raw_videos {
            let record = validate_record(raw, &known)?;
            if index.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            index.insert(record.id.clone(), videos.len());
            videos.push(record);
        }

        debug!(
            "Catalog ingested: {} videos across {} categories",
            videos.len(),
            categories.len()
        );

        Ok(Self {
            categories,
            videos,
            index,
        })
    }

    pub fn load_json(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&contents)?;
        info!(
            "Loaded catalog file {} with {} videos",
            path.display(),
            file.videos.len()
        );
        Self::from_raw(file.categories, file.videos)
    }

    /// Unknown ids are not an error; callers fall back to the catalog view.
    pub fn find(&self, id: &str) -> Option<&VideoRecord> {
        self.index.get(id).map(|&pos| &self.videos[pos])
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

fn validate_record(raw: RawVideo, known: &HashSet<&str>) -> Result<VideoRecord, CatalogError> {
    if raw.id.trim().is_empty() {
        return Err(CatalogError::EmptyId);
    }

    let duration_seconds =
        parse_clock_duration(&raw.duration).ok_or_else(|| CatalogError::MalformedDuration {
            id: raw.id.clone(),
            value: raw.duration.clone(),
        })?;

    if !known.contains(raw.category.as_str()) {
        return Err(CatalogError::UnknownCategory {
            id: raw.id,
            category: raw.category,
        });
    }

    let text_fields = [
        ("id", raw.id.as_str()),
        ("title", raw.title.as_str()),
        ("description", raw.description.as_str()),
        ("channel", raw.channel.as_str()),
        ("category", raw.category.as_str()),
    ];
    let bad_field = text_fields
        .into_iter()
        .chain(raw.tags.iter().map(|tag| ("tags", tag.as_str())))
        .find(|(_, value)| !value.chars().all(is_xml_char))
        .map(|(field, _)| field);
    if let Some(field) = bad_field {
        return Err(CatalogError::NonXmlCharacter { id: raw.id, field });
    }

    Ok(VideoRecord {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        channel: raw.channel,
        category: raw.category,
        tags: raw.tags,
        duration_seconds,
        views: raw.views,
        likes: raw.likes,
        dislikes: raw.dislikes,
        channel_subscribers: raw.channel_subscribers,
        upload_date: raw.upload_date,
        thumbnail_url: raw.thumbnail_url,
        channel_avatar_url: raw.channel_avatar_url,
        embed_url: raw.embed_url.filter(|url| !url.trim().is_empty()),
    })
}
