use crate::models::VideoRecord;
use crate::utils::{absolute_url, format_iso8601_timestamp, is_xml_char, normalize_base_url};
use log::debug;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::{Arc, Mutex};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";

/// Escape the five XML special characters and drop characters XML 1.0 cannot
/// carry at all.
pub fn escape_xml(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Sitemap with the home page plus one video entry per catalog record.
/// The home `lastmod` is the newest upload, so output depends only on inputs.
pub fn build_sitemap(catalog: &[VideoRecord], base_url: &str) -> String {
    let base = normalize_base_url(base_url);
    let mut xml = String::with_capacity(512 + catalog.len() * 1024);
    // Writing into a String cannot fail.
    let _ = write_sitemap(&mut xml, catalog, base);
    xml
}

fn write_sitemap(xml: &mut String, catalog: &[VideoRecord], base: &str) -> fmt::Result {
    writeln!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        xml,
        "<urlset xmlns=\"{SITEMAP_NS}\"\n        xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n        xmlns:video=\"{VIDEO_NS}\"\n        xsi:schemaLocation=\"{SITEMAP_NS} {SITEMAP_NS}/sitemap.xsd {VIDEO_NS} {VIDEO_NS}/sitemap-video.xsd\">"
    )?;

    writeln!(xml, "  <url>")?;
    writeln!(xml, "    <loc>{}/</loc>", escape_xml(base))?;
    if let Some(newest) = catalog.iter().map(|v| v.upload_date).max() {
        writeln!(xml, "    <lastmod>{}</lastmod>", format_iso8601_timestamp(&newest))?;
    }
    writeln!(xml, "    <changefreq>daily</changefreq>")?;
    writeln!(xml, "    <priority>1.0</priority>")?;
    writeln!(xml, "  </url>")?;

    for video in catalog {
        write_video_entry(xml, base, video)?;
    }

    writeln!(xml, "</urlset>")
}

fn write_video_entry(xml: &mut String, base: &str, video: &VideoRecord) -> fmt::Result {
    let published = format_iso8601_timestamp(&video.upload_date);
    let page_url = format!("{base}/video/{}", urlencoding::encode(&video.id));
    let uploader_url = format!("{base}/channel/{}", urlencoding::encode(&video.channel));

    writeln!(xml, "  <url>")?;
    writeln!(xml, "    <loc>{}</loc>", escape_xml(&page_url))?;
    writeln!(xml, "    <lastmod>{published}</lastmod>")?;
    writeln!(xml, "    <changefreq>weekly</changefreq>")?;
    writeln!(xml, "    <priority>0.8</priority>")?;
    writeln!(xml, "    <video:video>")?;
    writeln!(
        xml,
        "      <video:thumbnail_loc>{}</video:thumbnail_loc>",
        escape_xml(&absolute_url(base, &video.thumbnail_url))
    )?;
    writeln!(xml, "      <video:title>{}</video:title>", escape_xml(&video.title))?;
    writeln!(
        xml,
        "      <video:description>{}</video:description>",
        escape_xml(&video.description)
    )?;
    if let Some(embed_url) = &video.embed_url {
        writeln!(
            xml,
            "      <video:player_loc>{}</video:player_loc>",
            escape_xml(embed_url)
        )?;
    }
    writeln!(xml, "      <video:duration>{}</video:duration>", video.duration_seconds)?;
    writeln!(
        xml,
        "      <video:publication_date>{published}</video:publication_date>"
    )?;
    writeln!(xml, "      <video:family_friendly>yes</video:family_friendly>")?;
    writeln!(
        xml,
        "      <video:uploader info=\"{}\">{}</video:uploader>",
        escape_xml(&uploader_url),
        escape_xml(&video.channel)
    )?;
    writeln!(xml, "      <video:view_count>{}</video:view_count>", video.views)?;
    for tag in &video.tags {
        writeln!(xml, "      <video:tag>{}</video:tag>", escape_xml(tag))?;
    }
    writeln!(
        xml,
        "      <video:category>{}</video:category>",
        escape_xml(&video.category)
    )?;
    writeln!(xml, "    </video:video>")?;
    writeln!(xml, "  </url>")
}

const MAX_CACHED_SITEMAPS: usize = 16;

/// Memoizes generated sitemaps per base URL. The catalog never changes after
/// startup, so entries never go stale; the map is cleared once it fills up.
#[derive(Default)]
pub struct SitemapCache {
    entries: Mutex<HashMap<String, Arc<str>>>,
}

impl SitemapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&self, catalog: &[VideoRecord], base_url: &str) -> Arc<str> {
        let key = normalize_base_url(base_url).to_string();

        if let Ok(entries) = self.entries.lock() {
            if let Some(hit) = entries.get(&key) {
                return hit.clone();
            }
        }

        let sitemap: Arc<str> = build_sitemap(catalog, &key).into();
        debug!("Built sitemap for {key} ({} bytes)", sitemap.len());

        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= MAX_CACHED_SITEMAPS {
                entries.clear();
            }
            entries.insert(key, sitemap.clone());
        }
        sitemap
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
