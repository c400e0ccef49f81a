use crate::models::{MetaTagSet, SiteContext, VideoRecord};
use crate::utils::{absolute_url, format_iso8601_duration, format_iso8601_timestamp, normalize_base_url};
use serde_json::json;

/// Document title, description, keywords, OpenGraph/Twitter tags and a
/// schema.org `VideoObject` for one video page.
pub fn build_video_meta(video: &VideoRecord, site: &SiteContext) -> MetaTagSet {
    let base = normalize_base_url(&site.base_url);
    let page_url = format!("{base}/video/{}", urlencoding::encode(&video.id));
    let image = absolute_url(base, &video.thumbnail_url);

    let keywords = [video.title.as_str(), video.channel.as_str(), video.category.as_str()]
        .into_iter()
        .chain(video.tags.iter().map(String::as_str))
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let mut structured_data = json!({
        "@context": "https://schema.org",
        "@type": "VideoObject",
        "name": video.title,
        "description": video.description,
        "thumbnailUrl": image,
        "uploadDate": format_iso8601_timestamp(&video.upload_date),
        "duration": format_iso8601_duration(video.duration_seconds),
        "interactionStatistic": {
            "@type": "InteractionCounter",
            "interactionType": { "@type": "WatchAction" },
            "userInteractionCount": video.views
        }
    });
    if let Some(embed_url) = &video.embed_url {
        structured_data["embedUrl"] = json!(embed_url);
    }

    let twitter_card = if video.embed_url.is_some() {
        "player"
    } else {
        "summary_large_image"
    };

    MetaTagSet {
        title: format!("{} - {}", video.title, site.site_name),
        description: video.description.clone(),
        keywords,
        og_type: "video.other".to_string(),
        og_title: video.title.clone(),
        og_description: video.description.clone(),
        og_image: image.clone(),
        og_url: page_url,
        og_video: video.embed_url.clone(),
        twitter_card: twitter_card.to_string(),
        twitter_title: video.title.clone(),
        twitter_description: video.description.clone(),
        twitter_image: image,
        structured_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn site() -> SiteContext {
        SiteContext {
            site_name: "VideoHub".to_string(),
            base_url: "https://example.com/".to_string(),
        }
    }

    fn video() -> VideoRecord {
        VideoRecord {
            id: "featured-2".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            description: "The classic music video that started it all".to_string(),
            channel: "Rick Astley".to_string(),
            category: "Music".to_string(),
            tags: vec!["music".to_string(), "classic".to_string()],
            duration_seconds: 213,
            views: 1_200_000,
            likes: 85_000,
            dislikes: 300,
            channel_subscribers: 2_000_000,
            upload_date: Utc.with_ymd_and_hms(2024, 2, 12, 0, 0, 0).unwrap(),
            thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
            channel_avatar_url: "/placeholder.svg".to_string(),
            embed_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()),
        }
    }

    #[test]
    fn builds_titles_and_keywords() {
        let meta = build_video_meta(&video(), &site());
        assert_eq!(meta.title, "Never Gonna Give You Up - VideoHub");
        assert_eq!(
            meta.keywords,
            "Never Gonna Give You Up, Rick Astley, Music, music, classic"
        );
        assert_eq!(meta.og_url, "https://example.com/video/featured-2");
        assert_eq!(meta.og_image, meta.twitter_image);
        assert_eq!(meta.twitter_card, "player");
    }

    #[test]
    fn structured_data_is_a_video_object() {
        let meta = build_video_meta(&video(), &site());
        let data = &meta.structured_data;
        assert_eq!(data["@type"], "VideoObject");
        assert_eq!(data["duration"], "PT3M33S");
        assert_eq!(data["uploadDate"], "2024-02-12T00:00:00.000Z");
        assert_eq!(data["interactionStatistic"]["userInteractionCount"], 1_200_000);
        assert_eq!(data["embedUrl"], "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn missing_embed_does_not_fail() {
        let mut v = video();
        v.embed_url = None;
        v.thumbnail_url = "/placeholder.svg".to_string();
        let meta = build_video_meta(&v, &site());
        assert!(meta.og_video.is_none());
        assert!(meta.structured_data.get("embedUrl").is_none());
        assert_eq!(meta.twitter_card, "summary_large_image");
        assert_eq!(meta.og_image, "https://example.com/placeholder.svg");
    }
}
