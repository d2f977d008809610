//! Site Classifiers
//!
//! Maps raw climate and soil readings onto the discrete categorical codes
//! stored in the plant catalog:
//! - mean projected temperature (°C) → hardiness zone 0-10
//! - mean daily rainfall (mm) → moisture class (D … We)
//! - sand/silt/clay content (g/kg) → soil texture class (L … H) [texture.rs]
//! - soil pH → pH class (A … B)
//!
//! All classifiers are pure total functions.

pub mod texture;

pub use texture::{classify_soil_texture, SoilClass};

// ============================================================================
// Hardiness Zone
// ============================================================================

/// Warmest zone; assigned to any site at or above [`WARM_ZONE_TEMP_C`].
pub const WARMEST_ZONE: u8 = 10;

/// Mean temperature (°C) at which a site is pinned to the warmest zone.
pub const WARM_ZONE_TEMP_C: f64 = 13.0;

/// Ascending bin edges for the zone step function, 7 °C apart.
/// A temperature falls in the zone of the first edge strictly above it.
const ZONE_BIN_EDGES_C: [f64; 10] = [
    -50.0, -43.0, -36.0, -29.0, -22.0, -15.0, -8.0, -1.0, 6.0, 13.0,
];

/// Derive the hardiness zone (0 = coldest, 10 = warmest) from the mean
/// projected temperature in °C. Monotonically non-decreasing in the input.
pub fn temperature_to_hardiness_zone(mean_temp_c: f64) -> u8 {
    if mean_temp_c >= WARM_ZONE_TEMP_C {
        return WARMEST_ZONE;
    }
    ZONE_BIN_EDGES_C
        .iter()
        .position(|&edge| edge > mean_temp_c)
        .unwrap_or(0) as u8
}

// ============================================================================
// Moisture Class
// ============================================================================

/// Soil moisture class derived from rainfall (matches catalog codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MoistureClass {
    /// D: dry
    Dry,
    /// DM: dry to moist
    DryMoist,
    /// M: moist
    Moist,
    /// MWe: moist to wet
    MoistWet,
    /// We: wet
    Wet,
}

impl MoistureClass {
    /// The class code as stored in plant records
    pub fn code(&self) -> &'static str {
        match self {
            MoistureClass::Dry => "D",
            MoistureClass::DryMoist => "DM",
            MoistureClass::Moist => "M",
            MoistureClass::MoistWet => "MWe",
            MoistureClass::Wet => "We",
        }
    }

    /// Parse a stored class code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "D" => Some(MoistureClass::Dry),
            "DM" => Some(MoistureClass::DryMoist),
            "M" => Some(MoistureClass::Moist),
            "MWe" => Some(MoistureClass::MoistWet),
            "We" => Some(MoistureClass::Wet),
            _ => None,
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            MoistureClass::Dry => "Dry",
            MoistureClass::DryMoist => "Dry to moist",
            MoistureClass::Moist => "Moist",
            MoistureClass::MoistWet => "Moist to wet",
            MoistureClass::Wet => "Wet",
        }
    }
}

/// Classify mean daily rainfall (mm/day) into a moisture class.
/// All thresholds are exclusive upper bounds.
pub fn rainfall_to_moisture_class(mean_daily_rain_mm: f64) -> MoistureClass {
    if mean_daily_rain_mm < 7.0 {
        MoistureClass::Dry
    } else if mean_daily_rain_mm < 14.0 {
        MoistureClass::DryMoist
    } else if mean_daily_rain_mm < 21.0 {
        MoistureClass::Moist
    } else if mean_daily_rain_mm < 28.0 {
        MoistureClass::MoistWet
    } else {
        MoistureClass::Wet
    }
}

// ============================================================================
// pH Class
// ============================================================================

/// Soil acidity class derived from pH (matches catalog codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PhClass {
    /// A: acid
    Acid,
    /// AN: acid to neutral
    AcidNeutral,
    /// ANB: acid to basic
    AcidNeutralBasic,
    /// NB: neutral to basic
    NeutralBasic,
    /// B: basic
    Basic,
}

impl PhClass {
    /// The class code as stored in plant records
    pub fn code(&self) -> &'static str {
        match self {
            PhClass::Acid => "A",
            PhClass::AcidNeutral => "AN",
            PhClass::AcidNeutralBasic => "ANB",
            PhClass::NeutralBasic => "NB",
            PhClass::Basic => "B",
        }
    }

    /// Parse a stored class code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "A" => Some(PhClass::Acid),
            "AN" => Some(PhClass::AcidNeutral),
            "ANB" => Some(PhClass::AcidNeutralBasic),
            "NB" => Some(PhClass::NeutralBasic),
            "B" => Some(PhClass::Basic),
            _ => None,
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            PhClass::Acid => "Acid",
            PhClass::AcidNeutral => "Acid to neutral",
            PhClass::AcidNeutralBasic => "Acid to basic",
            PhClass::NeutralBasic => "Neutral to basic",
            PhClass::Basic => "Basic",
        }
    }
}

/// Classify soil pH into an acidity class.
/// The lowest boundary is strict; the rest are inclusive upper bounds.
pub fn ph_to_category(ph: f64) -> PhClass {
    if ph < 6.1 {
        PhClass::Acid
    } else if ph <= 6.6 {
        PhClass::AcidNeutral
    } else if ph <= 7.3 {
        PhClass::AcidNeutralBasic
    } else if ph <= 7.8 {
        PhClass::NeutralBasic
    } else {
        PhClass::Basic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardiness_zone_steps() {
        assert_eq!(temperature_to_hardiness_zone(-60.0), 0);
        assert_eq!(temperature_to_hardiness_zone(-50.0), 1);
        assert_eq!(temperature_to_hardiness_zone(-45.0), 1);
        assert_eq!(temperature_to_hardiness_zone(-22.5), 4);
        assert_eq!(temperature_to_hardiness_zone(0.0), 8);
        assert_eq!(temperature_to_hardiness_zone(12.9), 9);
        assert_eq!(temperature_to_hardiness_zone(13.0), 10);
        assert_eq!(temperature_to_hardiness_zone(100.0), 10);
    }

    #[test]
    fn test_hardiness_zone_monotonic() {
        let mut last = 0;
        let mut temp = -60.0;
        while temp <= 40.0 {
            let zone = temperature_to_hardiness_zone(temp);
            assert!(zone >= last, "zone dropped at {} °C", temp);
            last = zone;
            temp += 0.25;
        }
    }

    #[test]
    fn test_moisture_boundaries() {
        assert_eq!(rainfall_to_moisture_class(6.99), MoistureClass::Dry);
        assert_eq!(rainfall_to_moisture_class(7.0), MoistureClass::DryMoist);
        assert_eq!(rainfall_to_moisture_class(14.0), MoistureClass::Moist);
        assert_eq!(rainfall_to_moisture_class(27.99), MoistureClass::MoistWet);
        assert_eq!(rainfall_to_moisture_class(28.0), MoistureClass::Wet);
    }

    #[test]
    fn test_ph_boundaries() {
        assert_eq!(ph_to_category(6.0), PhClass::Acid);
        assert_eq!(ph_to_category(6.1), PhClass::AcidNeutral);
        assert_eq!(ph_to_category(6.6), PhClass::AcidNeutral);
        assert_eq!(ph_to_category(7.3), PhClass::AcidNeutralBasic);
        assert_eq!(ph_to_category(7.8), PhClass::NeutralBasic);
        assert_eq!(ph_to_category(7.81), PhClass::Basic);
    }

    #[test]
    fn test_code_round_trip() {
        for class in [
            MoistureClass::Dry,
            MoistureClass::DryMoist,
            MoistureClass::Moist,
            MoistureClass::MoistWet,
            MoistureClass::Wet,
        ] {
            assert_eq!(MoistureClass::from_code(class.code()), Some(class));
        }
        for class in [
            PhClass::Acid,
            PhClass::AcidNeutral,
            PhClass::AcidNeutralBasic,
            PhClass::NeutralBasic,
            PhClass::Basic,
        ] {
            assert_eq!(PhClass::from_code(class.code()), Some(class));
        }
        assert_eq!(MoistureClass::from_code("??"), None);
        assert_eq!(PhClass::from_code(""), None);
    }
}
