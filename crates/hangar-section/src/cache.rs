use crate::error::Result;
use crate::profile::SectionConfig;
use crate::section::{CrossSection, SectionKey};
use std::collections::HashMap;
use std::sync::Arc;

/// Append-only store of built cross-sections, one per `(profile, variant)`.
///
/// Entries are never invalidated; callers share the same `Arc` for a key.
#[derive(Debug, Default)]
pub struct SectionCache {
    config: SectionConfig,
    sections: HashMap<SectionKey, Arc<CrossSection>>,
}

impl SectionCache {
    pub fn new(config: SectionConfig) -> Self {
        Self {
            config,
            sections: HashMap::new(),
        }
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn section(&mut self, profile: &str, variant: usize) -> Result<Arc<CrossSection>> {
        let key = SectionKey::new(profile, variant);
        if let Some(section) = self.sections.get(&key) {
            tracing::trace!(%key, "cross-section cache hit");
            return Ok(Arc::clone(section));
        }

        let roof = self.config.profile(profile)?;
        let section = Arc::new(CrossSection::for_profile(roof, variant, &self.config)?);
        tracing::debug!(
            %key,
            holes = section.holes.len(),
            shapes = section.shapes.len(),
            width_mm = section.width,
            height_mm = section.height,
            "built cross-section"
        );
        self.sections.insert(key, Arc::clone(&section));
        Ok(section)
    }

    /// Builds every configured profile and variant. Returns how many were new.
    pub fn warm(&mut self) -> Result<usize> {
        let keys: Vec<SectionKey> = self
            .config
            .profiles
            .iter()
            .flat_map(|p| (0..self.config.variants.len()).map(|v| SectionKey::new(p.name.clone(), v)))
            .collect();

        let mut built = 0;
        for key in keys {
            if !self.sections.contains_key(&key) {
                self.section(&key.profile, key.variant)?;
                built += 1;
            }
        }
        Ok(built)
    }

    pub fn contains(&self, key: &SectionKey) -> bool {
        self.sections.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
