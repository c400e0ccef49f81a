use crate::models::SiteOrigin;
use crate::AppState;
use log::info;
use rocket::http::{ContentType, Header};
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::{get, Response, State};
use std::io::Cursor;
use std::sync::Arc;

pub const SITEMAP_CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=3600";

pub struct SitemapXml(pub Arc<str>);

impl<'r> Responder<'r, 'static> for SitemapXml {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = self.0.to_string();
        Response::build()
            .header(ContentType::new("application", "xml"))
            .header(Header::new("Cache-Control", SITEMAP_CACHE_CONTROL))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[get("/sitemap.xml")]
pub fn serve_sitemap(origin: SiteOrigin, state: &State<AppState>) -> SitemapXml {
    info!("Serving sitemap for {}", origin.0);
    SitemapXml(
        state
            .sitemap_cache
            .get_or_build(state.catalog.videos(), &origin.0),
    )
}
