use crate::profile::SectionConfig;
use crate::section::{CrossSection, SectionKey};
use hangar_core::units::Units;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub key: SectionKey,
    pub units: Units,
    pub width: f64,
    pub height: f64,
    pub outline_vertices: usize,
    pub inner_faces: usize,
    pub shapes: usize,
    pub holes: usize,
    pub area: f64,
    pub path: String,
}

impl SectionReport {
    pub fn from_section(section: &CrossSection) -> Self {
        Self {
            key: section.key.clone(),
            units: section.units,
            width: section.width,
            height: section.height,
            outline_vertices: section.outline.len(),
            inner_faces: section.holes.len(),
            shapes: section.shapes.len(),
            holes: section.hole_count(),
            area: section.shapes.iter().map(|s| s.area()).sum(),
            path: section.path.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub apex_x: f64,
    pub apex_y: f64,
    pub variants: usize,
}

pub fn profile_summaries(config: &SectionConfig) -> Vec<ProfileSummary> {
    config
        .profiles
        .iter()
        .map(|p| ProfileSummary {
            name: p.name.clone(),
            apex_x: p.apex.x,
            apex_y: p.apex.y,
            variants: config.variants.len(),
        })
        .collect()
}
