use crate::error::{Result, SectionError};
use crate::polygon::Polygon;
use hangar_core::geom::Vec2;
use serde::{Deserialize, Serialize};

/// Dimensions shared by every cross-section, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConstants {
    pub total_width_mm: f64,
    pub eaves_height_mm: f64,
    pub floor_thickness_mm: f64,
}

impl Default for SectionConstants {
    fn default() -> Self {
        Self {
            total_width_mm: 5700.0,
            eaves_height_mm: 6000.0,
            floor_thickness_mm: 200.0,
        }
    }
}

/// Wall thickness and floor level of one module variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionVariant {
    pub frame_width_mm: f64,
    pub ceiling_height_mm: f64,
}

impl SectionVariant {
    pub const fn new(frame_width_mm: f64, ceiling_height_mm: f64) -> Self {
        Self {
            frame_width_mm,
            ceiling_height_mm,
        }
    }

    pub fn standard() -> Vec<SectionVariant> {
        vec![Self::new(500.0, 3000.0), Self::new(300.0, 3000.0)]
    }
}

/// Gable roof given by its apex; the eaves sit on both outer walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofProfile {
    pub name: String,
    pub apex: Vec2,
}

impl RoofProfile {
    pub fn new(name: impl Into<String>, apex: Vec2) -> Self {
        Self {
            name: name.into(),
            apex,
        }
    }

    /// Profiles `A`, `B` and `C` laid out on `constants.total_width_mm`.
    pub fn standard(constants: &SectionConstants) -> Vec<RoofProfile> {
        let w = constants.total_width_mm;
        vec![
            Self::new("A", Vec2::new(w / 2.0, 8850.0)),
            Self::new("B", Vec2::new(w / 4.0, 8468.0)),
            Self::new("C", Vec2::new(w / 2.0, 7645.0)),
        ]
    }

    /// Base corner, eave, apex, opposite eave, opposite base corner.
    pub fn points(&self, constants: &SectionConstants) -> Vec<Vec2> {
        let w = constants.total_width_mm;
        let eaves = constants.eaves_height_mm;
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, eaves),
            self.apex,
            Vec2::new(w, eaves),
            Vec2::new(w, 0.0),
        ]
    }

    pub fn outline(&self, constants: &SectionConstants) -> Result<Polygon> {
        Polygon::new(self.points(constants)).map_err(|err| match err {
            SectionError::MalformedPolygon(msg) => {
                SectionError::MalformedPolygon(format!("roof profile {:?}: {msg}", self.name))
            }
            other => other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub constants: SectionConstants,
    pub variants: Vec<SectionVariant>,
    pub profiles: Vec<RoofProfile>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self::with_constants(SectionConstants::default())
    }
}

impl SectionConfig {
    /// Standard variants and profiles for the given constants.
    pub fn with_constants(constants: SectionConstants) -> Self {
        Self {
            constants,
            variants: SectionVariant::standard(),
            profiles: RoofProfile::standard(&constants),
        }
    }

    pub fn profile(&self, name: &str) -> Result<&RoofProfile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SectionError::UnknownProfile(name.to_string()))
    }

    pub fn variant(&self, profile: &str, index: usize) -> Result<SectionVariant> {
        self.variants
            .get(index)
            .copied()
            .ok_or_else(|| SectionError::UnknownVariant {
                profile: profile.to_string(),
                variant: index,
                available: self.variants.len(),
            })
    }
}
