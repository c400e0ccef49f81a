pub mod search;
pub mod sitemap;
pub mod video;

pub use search::*;
pub use sitemap::*;
pub use video::*;
