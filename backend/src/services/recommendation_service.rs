use crate::models::VideoRecord;

pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Videos sharing the category or at least one tag with `current`, in catalog
/// order, capped at `limit`. Never includes `current` and never pads.
pub fn related_to<'a>(
    catalog: &'a [VideoRecord],
    current: &VideoRecord,
    limit: usize,
) -> Vec<&'a VideoRecord> {
    catalog
        .iter()
        .filter(|candidate| candidate.id != current.id)
        .filter(|candidate| {
            candidate.category == current.category
                || candidate.tags.iter().any(|tag| current.tags.contains(tag))
        })
        .take(limit)
        .collect()
}
