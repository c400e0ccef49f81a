use crate::models::{CategoryFilter, QueryState, SortKey, VideoRecord};
use log::debug;

/// One page of the filtered, sorted catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub results: Vec<&'a VideoRecord>,
    pub total_matched: usize,
    pub page_size: usize,
}

impl QueryResult<'_> {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_matched.div_ceil(self.page_size)
    }
}

/// Text filter, category filter, stable sort, then pagination.
/// Out-of-range pages come back empty rather than failing.
pub fn query<'a>(catalog: &'a [VideoRecord], state: &QueryState) -> QueryResult<'a> {
    let needle = state.search_text.to_lowercase();

    let mut matched: Vec<&VideoRecord> = catalog
        .iter()
        .filter(|video| needle.is_empty() || matches_text(video, &needle))
        .filter(|video| matches_category(video, &state.category))
        .collect();

    sort_videos(&mut matched, state.sort_key);

    let total_matched = matched.len();
    let results = page_slice(&matched, state.page, state.page_size).to_vec();

    debug!(
        "Query '{}' ({:?}, {}) matched {} videos, page {} has {}",
        state.search_text,
        state.category,
        state.sort_key.key(),
        total_matched,
        state.page,
        results.len()
    );

    QueryResult {
        results,
        total_matched,
        page_size: state.page_size,
    }
}

fn matches_text(video: &VideoRecord, needle: &str) -> bool {
    video.title.to_lowercase().contains(needle)
        || video.channel.to_lowercase().contains(needle)
        || video
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_category(video: &VideoRecord, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => &video.category == category,
    }
}

// `sort_by` is stable, so equal keys keep catalog order.
fn sort_videos(videos: &mut [&VideoRecord], sort_key: SortKey) {
    match sort_key {
        SortKey::Recency => videos.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
        SortKey::Popularity => videos.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Likes => videos.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortKey::DurationDesc => {
            videos.sort_by(|a, b| b.duration_seconds.cmp(&a.duration_seconds))
        }
    }
}

fn page_slice<'s, T>(items: &'s [T], page: usize, page_size: usize) -> &'s [T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn video(id: &str, category: &str, views: u64, month: u32) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: format!("Video {id}"),
            description: String::new(),
            channel: "Some Channel".to_string(),
            category: category.to_string(),
            tags: vec![],
            duration_seconds: 60,
            views,
            likes: 0,
            dislikes: 0,
            channel_subscribers: 0,
            upload_date: Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap(),
            thumbnail_url: "/placeholder.svg".to_string(),
            channel_avatar_url: "/placeholder.svg".to_string(),
            embed_url: None,
        }
    }

    fn abc() -> Vec<VideoRecord> {
        vec![
            video("A", "Music", 100, 1),
            video("B", "Music", 300, 3),
            video("C", "Gaming", 200, 2),
        ]
    }

    fn ids(result: &QueryResult<'_>) -> Vec<String> {
        result.results.iter().map(|v| v.id.clone()).collect()
    }

    fn state(page: usize, page_size: usize) -> QueryState {
        QueryState {
            page,
            ..QueryState::first_page(page_size)
        }
    }

    #[test]
    fn music_by_popularity() {
        let catalog = abc();
        let result = query(
            &catalog,
            &QueryState {
                category: CategoryFilter::Only("Music".to_string()),
                sort_key: SortKey::Popularity,
                ..QueryState::first_page(10)
            },
        );
        assert_eq!(ids(&result), vec!["B", "A"]);
        assert_eq!(result.total_matched, 2);
        assert_eq!(result.total_pages(), 1);
    }

    #[test]
    fn recency_sorts_newest_first() {
        let catalog = abc();
        let result = query(&catalog, &state(1, 10));
        assert_eq!(ids(&result), vec!["B", "C", "A"]);
    }

    #[test]
    fn text_matches_title_channel_or_tag_case_insensitively() {
        let mut catalog = abc();
        catalog[0].title = "Live CONCERT".to_string();
        catalog[1].channel = "Concert Hall".to_string();
        catalog[2].tags = vec!["concerts".to_string()];
        catalog.push(VideoRecord {
            description: "a concert in the description only".to_string(),
            ..video("D", "Music", 1, 4)
        });

        let result = query(
            &catalog,
            &QueryState {
                search_text: "Concert".to_string(),
                ..QueryState::first_page(10)
            },
        );
        let mut found = ids(&result);
        found.sort();
        assert_eq!(found, vec!["A", "B", "C"]);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let catalog = abc();
        let result = query(
            &catalog,
            &QueryState {
                category: CategoryFilter::Only("music".to_string()),
                ..QueryState::first_page(10)
            },
        );
        assert!(result.results.is_empty());
        assert_eq!(result.total_matched, 0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog: Vec<VideoRecord> = (0..6)
            .map(|i| video(&format!("v{i}"), "Music", if i % 2 == 0 { 50 } else { 10 }, 1))
            .collect();
        let result = query(
            &catalog,
            &QueryState {
                sort_key: SortKey::Popularity,
                ..QueryState::first_page(10)
            },
        );
        assert_eq!(ids(&result), vec!["v0", "v2", "v4", "v1", "v3", "v5"]);
    }

    #[test]
    fn pages_reconstruct_the_sorted_catalog() {
        let catalog: Vec<VideoRecord> = (0..23)
            .map(|i| video(&format!("v{i}"), "Music", (i * 37 % 11) as u64, 1 + (i % 12) as u32))
            .collect();
        let full = query(&catalog, &state(1, 100));
        assert_eq!(full.results.len(), 23);

        let first = query(&catalog, &state(1, 5));
        assert_eq!(first.total_pages(), 5);

        let mut stitched = Vec::new();
        for page in 1..=first.total_pages() {
            stitched.extend(query(&catalog, &state(page, 5)).results);
        }
        assert_eq!(stitched, full.results);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let catalog = abc();
        let result = query(&catalog, &state(4, 2));
        assert!(result.results.is_empty());
        assert_eq!(result.total_matched, 3);
        assert_eq!(result.total_pages(), 2);

        assert!(query(&catalog, &state(0, 2)).results.is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let catalog = abc();
        let s = QueryState {
            sort_key: SortKey::Likes,
            ..QueryState::first_page(2)
        };
        assert_eq!(query(&catalog, &s), query(&catalog, &s));
        assert_eq!(catalog, abc());
    }
}
