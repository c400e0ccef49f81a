use crate::models::RawVideo;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

const PLACEHOLDER: &str = "/placeholder.svg";
const TWO_YEARS_SECS: i64 = 2 * 365 * 24 * 60 * 60;

pub const CATEGORIES: [&str; 14] = [
    "Music",
    "Entertainment",
    "Gaming",
    "Education",
    "Technology",
    "Sports",
    "Travel",
    "Food",
    "Lifestyle",
    "Art",
    "Science",
    "News",
    "Comedy",
    "Documentary",
];

struct Channel {
    name: &'static str,
    subscribers: u64,
}

const CHANNELS: [Channel; 10] = [
    Channel {
        name: "TechReview Pro",
        subscribers: 2_500_000,
    },
    Channel {
        name: "Music Vibes",
        subscribers: 1_800_000,
    },
    Channel {
        name: "Gaming Central",
        subscribers: 3_200_000,
    },
    Channel {
        name: "EduStream",
        subscribers: 890_000,
    },
    Channel {
        name: "Travel Tales",
        subscribers: 1_200_000,
    },
    Channel {
        name: "Food Adventures",
        subscribers: 950_000,
    },
    Channel {
        name: "Science Daily",
        subscribers: 1_500_000,
    },
    Channel {
        name: "Comedy Club",
        subscribers: 2_100_000,
    },
    Channel {
        name: "Art Gallery",
        subscribers: 680_000,
    },
    Channel {
        name: "News Network",
        subscribers: 4_500_000,
    },
];

const TITLES: [&str; 20] = [
    "Amazing Discovery Changes Everything",
    "Top 10 Tips for Beginners",
    "Ultimate Guide to Success",
    "Behind the Scenes Documentary",
    "Epic Compilation 2024",
    "Live Performance Highlights",
    "Tutorial: Master This Skill",
    "Reaction to Viral Video",
    "Deep Dive Analysis",
    "Quick Tips and Tricks",
    "Complete Walkthrough",
    "Expert Interview Session",
    "Breaking News Update",
    "Funny Moments Collection",
    "Technical Review",
    "Creative Process Revealed",
    "Challenge Accepted",
    "Historical Documentary",
    "Future Predictions",
    "Success Story",
];

const DESCRIPTIONS: [&str; 5] = [
    "In this comprehensive video, we explore the latest developments and provide detailed insights into this fascinating topic. Join us as we break down complex concepts into easy-to-understand explanations.",
    "Welcome to our channel! Today we're bringing you exclusive content that you won't find anywhere else. Make sure to subscribe and hit the notification bell for more amazing videos.",
    "This educational content is designed to help you learn and grow. We've put together expert knowledge and practical examples to create the ultimate learning experience.",
    "Behind-the-scenes footage reveals the incredible amount of work that goes into creating professional content. See what really happens when the cameras stop rolling.",
    "A carefully curated collection of the best moments, highlights, and unforgettable scenes that will keep you entertained from start to finish.",
];

const TAG_GROUPS: [[&str; 3]; 10] = [
    ["tutorial", "beginner", "howto"],
    ["review", "tech", "gadgets"],
    ["music", "live", "concert"],
    ["gaming", "gameplay", "strategy"],
    ["education", "learning", "tips"],
    ["travel", "adventure", "explore"],
    ["food", "cooking", "recipe"],
    ["comedy", "funny", "entertainment"],
    ["science", "research", "discovery"],
    ["news", "current", "update"],
];

pub fn category_names() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Two featured videos followed by `count` generated ones (`video-1..=count`).
/// Upload dates fall within the two years before `anchor`.
pub fn generate_videos<R: Rng>(rng: &mut R, count: usize, anchor: DateTime<Utc>) -> Vec<RawVideo> {
    let mut videos = featured_videos(anchor);
    videos.reserve(count);

    for i in 1..=count {
        let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
        let channel = &CHANNELS[rng.random_range(0..CHANNELS.len())];
        let title_base = TITLES[rng.random_range(0..TITLES.len())];
        let description = DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())];
        let tags = TAG_GROUPS[rng.random_range(0..TAG_GROUPS.len())];

        let minutes = rng.random_range(1..=45u32);
        let seconds = rng.random_range(0..60u32);
        let age = Duration::seconds(rng.random_range(0..TWO_YEARS_SECS));

        videos.push(RawVideo {
            id: format!("video-{i}"),
            title: format!("{title_base} {}", title_suffix(category))
                .trim_end()
                .to_string(),
            description: description.to_string(),
            channel: channel.name.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            duration: format!("{minutes}:{seconds:02}"),
            views: rng.random_range(1_000..5_001_000),
            likes: rng.random_range(100..200_100),
            dislikes: rng.random_range(10..5_010),
            channel_subscribers: channel.subscribers,
            upload_date: anchor - age,
            thumbnail_url: PLACEHOLDER.to_string(),
            channel_avatar_url: PLACEHOLDER.to_string(),
            embed_url: embed_url_for(i),
        });
    }

    videos
}

fn title_suffix(category: &str) -> &'static str {
    match category {
        "Music" => "(Official Video)",
        "Gaming" => "(Gameplay)",
        "Education" => "(Tutorial)",
        _ => "",
    }
}

fn embed_url_for(i: usize) -> Option<String> {
    match i {
        1 => Some("https://www.youtube.com/embed/0AT-PGwZI3w?si=D3Kcv75EeuVKehDn".to_string()),
        2 => Some("https://www.youtube.com/embed/2ECWX8GdDvA?si=2g4Nvy8e7Yy0HUsk".to_string()),
        3 => Some("https://www.youtube.com/embed/dQw4w9WgXcQ?si=2BANJczJnt8HLRkn".to_string()),
        _ if i % 10 == 0 => Some(format!("https://www.youtube.com/embed/dQw4w9WgXcQ?si=demo{i}")),
        _ => None,
    }
}

fn featured_videos(anchor: DateTime<Utc>) -> Vec<RawVideo> {
    let published = NaiveDate::from_ymd_opt(2024, 2, 12)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(anchor);

    vec![
        RawVideo {
            id: "featured-1".to_string(),
            title: "(418) AFRO HOUSE MIX WITH: KABZA DE SMALL, MAJOR LEAGUE DJZ, UNCLE WAFFLES, DBN GOGO".to_string(),
            description: "Enjoy this amazing AFRO HOUSE MIX featuring top artists like KABZA DE SMALL, MAJOR LEAGUE DJZ, UNCLE WAFFLES, and DBN GOGO.".to_string(),
            channel: "Music Mix".to_string(),
            category: "Music".to_string(),
            tags: ["afro house", "music mix", "kabza de small", "major league djz"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            duration: "1:00:00".to_string(),
            views: 2_500_000,
            likes: 75_000,
            dislikes: 200,
            channel_subscribers: 1_000_000,
            upload_date: published,
            thumbnail_url: "https://img.youtube.com/vi/0AT-PGwZI3w/maxresdefault.jpg".to_string(),
            channel_avatar_url: PLACEHOLDER.to_string(),
            embed_url: Some("https://www.youtube.com/embed/0AT-PGwZI3w?si=D3Kcv75EeuVKehDn".to_string()),
        },
        RawVideo {
            id: "featured-2".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            description: "The classic music video that started it all".to_string(),
            channel: "Rick Astley".to_string(),
            category: "Music".to_string(),
            tags: ["music", "classic", "rick astley"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            duration: "3:33".to_string(),
            views: 1_200_000,
            likes: 85_000,
            dislikes: 300,
            channel_subscribers: 2_000_000,
            upload_date: published,
            thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
            channel_avatar_url: PLACEHOLDER.to_string(),
            embed_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ?si=2BANJczJnt8HLRkn".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_clock_duration;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn same_seed_yields_same_catalog() {
        let a = generate_videos(&mut StdRng::seed_from_u64(3), 40, anchor());
        let b = generate_videos(&mut StdRng::seed_from_u64(3), 40, anchor());
        let ids_and_views = |v: &[RawVideo]| {
            v.iter()
                .map(|r| (r.id.clone(), r.views, r.duration.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids_and_views(&a[..]), ids_and_views(&b[..]));
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let videos = generate_videos(&mut StdRng::seed_from_u64(11), 200, anchor());
        assert_eq!(videos.len(), 202);

        for video in &videos[2..] {
            assert!(CATEGORIES.contains(&video.category.as_str()));
            let seconds = parse_clock_duration(&video.duration).unwrap();
            assert!((60..=45 * 60 + 59).contains(&seconds));
            assert!((1_000..5_001_000).contains(&video.views));
            assert!(video.upload_date <= anchor());
            assert!(video.upload_date >= anchor() - Duration::seconds(TWO_YEARS_SECS));
        }
    }

    #[test]
    fn embeds_follow_id_pattern() {
        let videos = generate_videos(&mut StdRng::seed_from_u64(1), 20, anchor());
        let embed_of = |id: &str| {
            videos
                .iter()
                .find(|v| v.id == id)
                .and_then(|v| v.embed_url.clone())
        };
        assert!(embed_of("video-1").is_some());
        assert!(embed_of("video-3").is_some());
        assert!(embed_of("video-4").is_none());
        assert!(embed_of("video-20").unwrap().ends_with("demo20"));
    }
}
