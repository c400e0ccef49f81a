pub mod catalog_service;
pub mod meta_service;
pub mod recommendation_service;
pub mod sample_data;
pub mod search_service;
pub mod sitemap_service;
