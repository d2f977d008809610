//! Site Profile
//!
//! A `SiteProfile` is the categorical description of one garden location:
//! hardiness zone plus moisture, soil texture, and pH classes. It is derived
//! once per request from the raw upstream readings and is immutable
//! thereafter; every candidate plant is scored against it.

use crate::classify::{
    classify_soil_texture, ph_to_category, rainfall_to_moisture_class,
    temperature_to_hardiness_zone, MoistureClass, PhClass, SoilClass,
};
use crate::error::SiteDataError;

/// Raw numeric readings for a location, as delivered by the upstream
/// climate and soil providers.
#[derive(Debug, Clone)]
pub struct SiteReadings {
    /// Location name for display (e.g. "London, UK")
    pub name: String,

    /// Mean projected temperature (°C)
    pub mean_temp_c: f64,

    /// Mean daily rainfall (mm/day)
    pub mean_daily_rain_mm: f64,

    /// Sand content (g/kg of soil)
    pub sand_g_kg: f64,

    /// Silt content (g/kg of soil)
    pub silt_g_kg: f64,

    /// Clay content (g/kg of soil)
    pub clay_g_kg: f64,

    /// Soil pH (H2O)
    pub ph: f64,
}

/// Categorical site profile used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SiteProfile {
    /// Hardiness zone, 0 (coldest) to 10 (warmest)
    pub hardiness_zone: u8,

    /// Moisture class derived from rainfall
    pub moisture: MoistureClass,

    /// Soil texture class derived from sand/silt/clay content
    pub soil: SoilClass,

    /// pH class
    pub ph: PhClass,
}

impl SiteProfile {
    /// Derive a profile from raw readings.
    ///
    /// Rejects non-finite readings and soil samples with no positive
    /// fraction; the classifiers themselves are total.
    pub fn from_readings(readings: &SiteReadings) -> Result<Self, SiteDataError> {
        let checks: [(&'static str, f64); 6] = [
            ("mean_temp_c", readings.mean_temp_c),
            ("mean_daily_rain_mm", readings.mean_daily_rain_mm),
            ("sand_g_kg", readings.sand_g_kg),
            ("silt_g_kg", readings.silt_g_kg),
            ("clay_g_kg", readings.clay_g_kg),
            ("ph", readings.ph),
        ];
        for (field, value) in checks {
            if !value.is_finite() {
                return Err(SiteDataError::NonFinite { field });
            }
        }
        if readings.sand_g_kg <= 0.0 && readings.silt_g_kg <= 0.0 && readings.clay_g_kg <= 0.0 {
            return Err(SiteDataError::EmptySoilSample);
        }

        Ok(SiteProfile {
            hardiness_zone: temperature_to_hardiness_zone(readings.mean_temp_c),
            moisture: rainfall_to_moisture_class(readings.mean_daily_rain_mm),
            soil: classify_soil_texture(
                readings.sand_g_kg,
                readings.silt_g_kg,
                readings.clay_g_kg,
            ),
            ph: ph_to_category(readings.ph),
        })
    }
}

// ============================================================================
// Sample Locations
// ============================================================================

/// Singapore - tropical, very wet, acidic laterite soil
pub fn singapore() -> SiteReadings {
    SiteReadings {
        name: "Singapore (Tropical)".to_string(),
        mean_temp_c: 27.5,
        mean_daily_rain_mm: 6.4,
        sand_g_kg: 400.0,
        silt_g_kg: 250.0,
        clay_g_kg: 350.0,
        ph: 5.5,
    }
}

/// London, UK - temperate oceanic, moderate rainfall, clay loam
pub fn london() -> SiteReadings {
    SiteReadings {
        name: "London, UK (Temperate)".to_string(),
        mean_temp_c: 11.0,
        mean_daily_rain_mm: 1.6,
        sand_g_kg: 380.0,
        silt_g_kg: 330.0,
        clay_g_kg: 290.0,
        ph: 6.5,
    }
}

/// Helsinki, Finland - cold continental, sandy moraine soil
pub fn helsinki() -> SiteReadings {
    SiteReadings {
        name: "Helsinki, Finland (Boreal)".to_string(),
        mean_temp_c: 5.5,
        mean_daily_rain_mm: 1.8,
        sand_g_kg: 500.0,
        silt_g_kg: 300.0,
        clay_g_kg: 200.0,
        ph: 5.8,
    }
}

/// All sample locations
pub fn sample_locations() -> Vec<SiteReadings> {
    vec![singapore(), london(), helsinki()]
}
