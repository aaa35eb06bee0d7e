pub mod boolean;
pub mod cache;
pub mod error;
pub mod offset;
pub mod polygon;
pub mod profile;
pub mod report;
pub mod section;
pub mod svg;

pub use cache::SectionCache;
pub use error::{Result, SectionError};
pub use polygon::{Polygon, PolygonSet};
pub use profile::{RoofProfile, SectionConfig, SectionConstants, SectionVariant};
pub use section::{CrossSection, SectionKey};

/// Cache with every configured profile and variant already built.
pub fn build_all(config: SectionConfig) -> Result<SectionCache> {
    let mut cache = SectionCache::new(config);
    cache.warm()?;
    Ok(cache)
}
