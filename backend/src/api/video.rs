use crate::models::{SiteContext, SiteOrigin, VideoCard, VideoDetail};
use crate::services::meta_service::build_video_meta;
use crate::services::recommendation_service::related_to;
use crate::utils::format_compact_count;
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, State};

/// Unknown ids answer `null` so the client can fall back to the catalog view.
#[get("/<id>")]
pub fn get_video(id: &str, origin: SiteOrigin, state: &State<AppState>) -> Json<Option<VideoDetail>> {
    let Some(video) = state.catalog.find(id) else {
        info!("Video '{id}' not found, returning empty selection");
        return Json(None);
    };

    let related = related_to(state.catalog.videos(), video, state.related_limit)
        .into_iter()
        .map(VideoCard::from)
        .collect();

    let site = SiteContext {
        site_name: state.site_name.clone(),
        base_url: origin.0,
    };

    Json(Some(VideoDetail {
        card: VideoCard::from(video),
        subscribers: format_compact_count(video.channel_subscribers),
        dislikes: format_compact_count(video.dislikes),
        related,
        meta: build_video_meta(video, &site),
        video: video.clone(),
    }))
}
