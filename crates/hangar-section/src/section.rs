use crate::boolean::union;
use crate::error::Result;
use crate::offset::offset;
use crate::polygon::{Polygon, PolygonSet};
use crate::profile::{RoofProfile, SectionConfig, SectionConstants, SectionVariant};
use crate::svg;
use hangar_core::geom::{BBox2, Vec2};
use hangar_core::units::{mm_to_m, Units};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    pub profile: String,
    pub variant: usize,
}

impl SectionKey {
    pub fn new(profile: impl Into<String>, variant: usize) -> Self {
        Self {
            profile: profile.into(),
            variant,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.profile, self.variant)
    }
}

/// Wall cross-section derived from a roof outline.
///
/// `holes` are the inner wall faces produced by the frame offset; `shapes` is
/// the drawable result after the floor strip has been merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub key: SectionKey,
    pub units: Units,
    pub outline: Polygon,
    pub holes: Vec<Polygon>,
    pub shapes: Vec<PolygonSet>,
    pub width: f64,
    pub height: f64,
    pub path: String,
}

impl CrossSection {
    pub fn build(
        key: SectionKey,
        outline: Polygon,
        constants: &SectionConstants,
        variant: &SectionVariant,
    ) -> Self {
        let holes = offset(&outline, -variant.frame_width_mm);
        if holes.is_empty() {
            tracing::debug!(
                %key,
                frame_width_mm = variant.frame_width_mm,
                "frame offset left no inner face; section is solid"
            );
        }

        let mut subject = Vec::with_capacity(holes.len() + 1);
        subject.push(outline.clone());
        subject.extend(holes.iter().cloned());
        let strip: Vec<Polygon> = floor_strip(constants, variant).into_iter().collect();
        let shapes = union(&subject, &strip);

        let bbox = outline.bbox();
        let path = svg::path_data(&shapes);
        Self {
            key,
            units: Units::Millimeters,
            outline,
            holes,
            shapes,
            width: bbox.width(),
            height: bbox.height(),
            path,
        }
    }

    pub fn for_profile(
        profile: &RoofProfile,
        variant_index: usize,
        config: &SectionConfig,
    ) -> Result<Self> {
        let variant = config.variant(&profile.name, variant_index)?;
        let outline = profile.outline(&config.constants)?;
        Ok(Self::build(
            SectionKey::new(profile.name.clone(), variant_index),
            outline,
            &config.constants,
            &variant,
        ))
    }

    pub fn hole_count(&self) -> usize {
        self.shapes.iter().map(|s| s.holes.len()).sum()
    }

    pub fn bbox(&self) -> BBox2 {
        self.shapes
            .iter()
            .fold(self.outline.bbox(), |acc, s| acc.union(&s.bbox()))
    }

    /// Copy scaled to meters for scene placement.
    pub fn to_meters(&self) -> Self {
        if self.units == Units::Meters {
            return self.clone();
        }
        let factor = mm_to_m(1.0);
        let shapes: Vec<PolygonSet> = self.shapes.iter().map(|s| s.scaled(factor)).collect();
        Self {
            key: self.key.clone(),
            units: Units::Meters,
            outline: self.outline.scaled(factor),
            holes: self.holes.iter().map(|h| h.scaled(factor)).collect(),
            path: svg::path_data(&shapes),
            shapes,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Floor slab spanning the full width at ceiling height. `None` when it has no area.
pub fn floor_strip(constants: &SectionConstants, variant: &SectionVariant) -> Option<Polygon> {
    let bottom = variant.ceiling_height_mm;
    Polygon::rect(
        Vec2::new(0.0, bottom),
        Vec2::new(constants.total_width_mm, bottom + constants.floor_thickness_mm),
    )
    .ok()
}
