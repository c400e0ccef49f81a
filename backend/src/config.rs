use crate::models::SiteOrigin;
use crate::services::catalog_service::{init_catalog, CatalogStore};
use crate::services::sitemap_service::SitemapCache;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::convert::Infallible;
use std::env;
use std::path::Path;
use url::Url;

lazy_static! {
    pub static ref SITE_NAME: String =
        env::var("SITE_NAME").unwrap_or_else(|_| "VideoHub".to_string());
    pub static ref DEFAULT_HOST: String =
        env::var("DEFAULT_HOST").unwrap_or_else(|_| "yourdomain.com".to_string());
    pub static ref DEFAULT_PROTO: String =
        env::var("DEFAULT_PROTO").unwrap_or_else(|_| "https".to_string());
    pub static ref CATALOG_PATH: Option<String> = env::var("CATALOG_PATH").ok();
    pub static ref CATALOG_SEED: u64 = env::var("CATALOG_SEED")
        .unwrap_or_else(|_| "42".to_string())
        .parse::<u64>()
        .unwrap_or(42);
    pub static ref CATALOG_SIZE: usize = env::var("CATALOG_SIZE")
        .unwrap_or_else(|_| "1000".to_string())
        .parse::<usize>()
        .unwrap_or(1000);
    pub static ref PAGE_SIZE: usize = env::var("PAGE_SIZE")
        .unwrap_or_else(|_| "12".to_string())
        .parse::<usize>()
        .ok()
        .filter(|size| *size > 0)
        .unwrap_or(12);
    pub static ref RELATED_LIMIT: usize = env::var("RELATED_LIMIT")
        .unwrap_or_else(|_| "5".to_string())
        .parse::<usize>()
        .unwrap_or(5);
    pub static ref CORS_ORIGINS: Vec<String> = env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn load_catalog() -> Result<CatalogStore> {
    let catalog = match CATALOG_PATH.as_deref() {
        Some(path) => CatalogStore::load_json(Path::new(path))
            .with_context(|| format!("Failed to load catalog from {path}"))?,
        None => init_catalog(*CATALOG_SEED, *CATALOG_SIZE)
            .context("Failed to build sample catalog")?,
    };
    info!(
        "Catalog ready: {} videos in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(catalog)
}

pub fn create_app_state() -> Result<AppState> {
    let catalog = load_catalog()?;
    let default_origin = resolve_base_url(None, None, None, &DEFAULT_PROTO, &DEFAULT_HOST)
        .unwrap_or_else(|| {
            warn!("DEFAULT_HOST/DEFAULT_PROTO do not form a valid URL, using https://yourdomain.com");
            "https://yourdomain.com".to_string()
        });

    Ok(AppState {
        catalog,
        site_name: SITE_NAME.clone(),
        default_origin,
        page_size: *PAGE_SIZE,
        related_limit: *RELATED_LIMIT,
        sitemap_cache: SitemapCache::new(),
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(CORS_ORIGINS.as_slice()))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

/// Build `proto://host` from request headers, or `None` if the pair is not a
/// bare origin. Only the first value of a comma separated forwarded header counts.
/// A missing or unsupported proto falls back to `default_proto`, then to https.
pub fn resolve_base_url(
    forwarded_host: Option<&str>,
    host: Option<&str>,
    proto: Option<&str>,
    default_proto: &str,
    default_host: &str,
) -> Option<String> {
    let first = |value: &str| value.split(',').next().unwrap_or("").trim().to_string();
    let scheme = |value: &str| match first(value).to_ascii_lowercase().as_str() {
        "http" => Some("http"),
        "https" => Some("https"),
        _ => None,
    };

    let host = forwarded_host
        .or(host)
        .map(first)
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| default_host.to_string());
    let proto = proto
        .and_then(scheme)
        .or_else(|| scheme(default_proto))
        .unwrap_or("https");

    let url = Url::parse(&format!("{proto}://{host}")).ok()?;
    let bare = url.host_str().is_some()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none();
    if !bare {
        return None;
    }
    Some(url.origin().ascii_serialization())
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SiteOrigin {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let default_origin = request
            .rocket()
            .state::<AppState>()
            .map(|state| state.default_origin.clone())
            .unwrap_or_else(|| format!("{}://{}", *DEFAULT_PROTO, *DEFAULT_HOST));

        let headers = request.headers();
        let forwarded_host = headers.get_one("X-Forwarded-Host");
        let host = headers.get_one("Host");
        if forwarded_host.is_none() && host.is_none() {
            return Outcome::Success(SiteOrigin(default_origin));
        }

        let proto = headers.get_one("X-Forwarded-Proto");
        let default_proto = default_origin.split("://").next().unwrap_or("https");
        let resolved = resolve_base_url(forwarded_host, host, proto, default_proto, &DEFAULT_HOST);
        Outcome::Success(SiteOrigin(resolved.unwrap_or(default_origin)))
    }
}
