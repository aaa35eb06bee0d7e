use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Millimeters,
    Meters,
}

impl Units {
    /// Size of one unit in millimeters.
    pub fn millimeters(self) -> f64 {
        match self {
            Units::Millimeters => 1.0,
            Units::Meters => 1000.0,
        }
    }

    pub fn convert(value: f64, from: Units, to: Units) -> f64 {
        if from == to {
            return value;
        }
        value * from.millimeters() / to.millimeters()
    }
}

pub fn mm_to_m(value: f64) -> f64 {
    Units::convert(value, Units::Millimeters, Units::Meters)
}

pub fn m_to_mm(value: f64) -> f64 {
    Units::convert(value, Units::Meters, Units::Millimeters)
}
