//! Carbon Sequestration Estimator
//!
//! Estimates the CO2 a plant draws down from its growth habit and mature
//! height. Three biomass models cover the catalog: an allometric tree
//! model, a spherical-crown shrub model, and a slender-stem herbaceous
//! model. Each follows the same green → dry → carbon → CO2 weight chain;
//! they differ in how green weight is approximated and in how the final
//! figure is reported (annual vs lifetime, kilograms vs pounds — see the
//! per-model docs).

use std::f64::consts::PI;

// ============================================================================
// Model Constants
// ============================================================================

/// Metres-to-feet divisor used throughout the biomass chain
const FEET_DIVISOR: f64 = 3.281;

/// Centimetres-to-inches divisor
const INCH_DIVISOR: f64 = 2.54;

/// Above-ground weight is scaled up 20% to include the root system
const ROOT_ALLOWANCE: f64 = 1.2;

/// Dry matter share of green weight
const DRY_MATTER_RATIO: f64 = 0.725;

/// Carbon share of dry weight
const CARBON_RATIO: f64 = 0.5;

/// CO2-to-carbon weight ratio
const CO2_PER_CARBON: f64 = 3.67;

/// Pounds per kilogram
const LB_PER_KG: f64 = 2.205;

/// Stem-girth coefficient split: thin stems accumulate proportionally more
/// of their volume low on the trunk
const THIN_STEM_COEFF: f64 = 0.25;
const THICK_STEM_COEFF: f64 = 0.15;

/// Diameter (cm) at which the tree model switches stem coefficients
pub const THIN_STEM_LIMIT_CM: f64 = 11.0;

/// Default trunk diameter (cm) when the record has none
pub const DEFAULT_TREE_DIAMETER_CM: f64 = 25.0;

/// Assumed ages for annualizing the tree and shrub estimates
pub const DEFAULT_TREE_AGE_YEARS: f64 = 10.0;
pub const DEFAULT_SHRUB_AGE_YEARS: f64 = 3.0;

/// Default stem diameter (cm) for herbaceous plants
pub const DEFAULT_HERB_DIAMETER_CM: f64 = 1.0;

/// Density heuristic numerator for the shrub model: taller shrubs are
/// treated as proportionally less dense
const SHRUB_DENSITY_SCALE: f64 = 25.0;

// ============================================================================
// Growth Habit
// ============================================================================

/// Catalog growth habits with a known biomass model.
///
/// Records carry the habit as a free string; parsing it into this closed
/// set decides which model (if any) applies. Habits outside the set get no
/// carbon estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthHabit {
    Tree,
    Bamboo,
    Shrub,
    Fern,
    Perennial,
    Annual,
    Bulb,
    Climber,
    Biennial,
    PerennialClimber,
    BiennialPerennial,
    AnnualPerennial,
    AnnualBiennial,
    Corm,
    AnnualClimber,
    /// Habit label not covered by any biomass model
    Unrecognized,
}

/// Which biomass model applies to a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiomassModel {
    Tree,
    Shrub,
    Herb,
}

impl GrowthHabit {
    /// Parse a catalog habit label. Labels are matched exactly after
    /// trimming; anything else is `Unrecognized`.
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "Tree" => GrowthHabit::Tree,
            "Bamboo" => GrowthHabit::Bamboo,
            "Shrub" => GrowthHabit::Shrub,
            "Fern" => GrowthHabit::Fern,
            "Perennial" => GrowthHabit::Perennial,
            "Annual" => GrowthHabit::Annual,
            "Bulb" => GrowthHabit::Bulb,
            "Climber" => GrowthHabit::Climber,
            "Biennial" => GrowthHabit::Biennial,
            "Perennial Climber" => GrowthHabit::PerennialClimber,
            "Biennial/Perennial" => GrowthHabit::BiennialPerennial,
            "Annual/Perennial" => GrowthHabit::AnnualPerennial,
            "Annual/Biennial" => GrowthHabit::AnnualBiennial,
            "Corm" => GrowthHabit::Corm,
            "Annual Climber" => GrowthHabit::AnnualClimber,
            _ => GrowthHabit::Unrecognized,
        }
    }

    /// The biomass model for this habit, if any
    pub fn biomass_model(&self) -> Option<BiomassModel> {
        match self {
            GrowthHabit::Tree | GrowthHabit::Bamboo => Some(BiomassModel::Tree),
            GrowthHabit::Shrub | GrowthHabit::Fern => Some(BiomassModel::Shrub),
            GrowthHabit::Perennial
            | GrowthHabit::Annual
            | GrowthHabit::Bulb
            | GrowthHabit::Climber
            | GrowthHabit::Biennial
            | GrowthHabit::PerennialClimber
            | GrowthHabit::BiennialPerennial
            | GrowthHabit::AnnualPerennial
            | GrowthHabit::AnnualBiennial
            | GrowthHabit::Corm
            | GrowthHabit::AnnualClimber => Some(BiomassModel::Herb),
            GrowthHabit::Unrecognized => None,
        }
    }
}

// ============================================================================
// Biomass Models
// ============================================================================

/// Green → dry → carbon → CO2 weight chain shared by all three models
fn green_to_co2(green_weight: f64) -> f64 {
    let dry_weight = DRY_MATTER_RATIO * green_weight;
    let carbon_weight = CARBON_RATIO * dry_weight;
    CO2_PER_CARBON * carbon_weight
}

/// Annual CO2 sequestration (kg/year) for trees and bamboo.
///
/// The stem coefficient switches at [`THIN_STEM_LIMIT_CM`]; the estimate is
/// discontinuous there by design of the girth split.
pub fn estimate_tree_co2(height_m: f64, diameter_cm: f64, age_years: f64) -> f64 {
    let height = height_m / FEET_DIVISOR;
    let diameter = diameter_cm / INCH_DIVISOR;

    let coeff = if diameter_cm < THIN_STEM_LIMIT_CM {
        THIN_STEM_COEFF
    } else {
        THICK_STEM_COEFF
    };
    let green_weight = coeff * diameter.powi(2) * height * ROOT_ALLOWANCE;

    green_to_co2(green_weight) / LB_PER_KG / age_years
}

/// Annual CO2 sequestration for shrubs and ferns.
///
/// The crown is approximated as a sphere of diameter `height_m`, with a
/// density scaling that decreases with height. The figure is reported in
/// pounds per year; the tree and herb models report kilograms.
pub fn estimate_shrub_co2(height_m: f64, age_years: f64) -> f64 {
    let scaling = SHRUB_DENSITY_SCALE / height_m;
    let volume = 4.0 / 3.0 * PI * (height_m / 2.0).powi(3);
    let green_weight = volume * scaling * ROOT_ALLOWANCE;

    green_to_co2(green_weight) / age_years
}

/// Lifetime CO2 sequestration (kg) for herbaceous plants.
///
/// Herbaceous stems are slim enough that no girth split applies, and the
/// figure covers the plant's life rather than a single year.
pub fn estimate_herb_co2(height_m: f64, diameter_cm: f64) -> f64 {
    let height = height_m / FEET_DIVISOR;
    let diameter = diameter_cm / INCH_DIVISOR;

    let green_weight = diameter.powi(2) * height * ROOT_ALLOWANCE;

    green_to_co2(green_weight) / LB_PER_KG
}

/// Estimate sequestration for a catalog entry.
///
/// Routes to the habit's biomass model; returns `None` when the habit has
/// no model or the height is missing. `diameter_cm` only influences the
/// tree model and falls back to [`DEFAULT_TREE_DIAMETER_CM`].
pub fn estimate_sequestration(
    habit: GrowthHabit,
    height_m: Option<f64>,
    diameter_cm: Option<f64>,
) -> Option<f64> {
    let height_m = height_m?;
    match habit.biomass_model()? {
        BiomassModel::Tree => Some(estimate_tree_co2(
            height_m,
            diameter_cm.unwrap_or(DEFAULT_TREE_DIAMETER_CM),
            DEFAULT_TREE_AGE_YEARS,
        )),
        BiomassModel::Shrub => Some(estimate_shrub_co2(height_m, DEFAULT_SHRUB_AGE_YEARS)),
        BiomassModel::Herb => Some(estimate_herb_co2(height_m, DEFAULT_HERB_DIAMETER_CM)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_habit_routing() {
        assert_eq!(GrowthHabit::parse("Tree").biomass_model(), Some(BiomassModel::Tree));
        assert_eq!(GrowthHabit::parse("Bamboo").biomass_model(), Some(BiomassModel::Tree));
        assert_eq!(GrowthHabit::parse("Fern").biomass_model(), Some(BiomassModel::Shrub));
        assert_eq!(GrowthHabit::parse("Annual Climber").biomass_model(), Some(BiomassModel::Herb));
        assert_eq!(GrowthHabit::parse("Biennial/Perennial").biomass_model(), Some(BiomassModel::Herb));
        assert_eq!(GrowthHabit::parse("Cactus"), GrowthHabit::Unrecognized);
        assert_eq!(GrowthHabit::parse("Cactus").biomass_model(), None);
    }

    #[test]
    fn test_tree_model_chain() {
        // height 10 m, default diameter 25 cm, age 10 y
        let height = 10.0 / FEET_DIVISOR;
        let diameter = 25.0 / INCH_DIVISOR;
        let green = THICK_STEM_COEFF * diameter * diameter * height * 1.2;
        let expected = 3.67 * 0.5 * 0.725 * green / 2.205 / 10.0;
        assert_relative_eq!(estimate_tree_co2(10.0, 25.0, 10.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_tree_stem_split_is_discontinuous() {
        // Same height either side of the 11 cm threshold: the thin-stem
        // coefficient is larger, so the narrower trunk scores higher than
        // proportional shrinkage alone would give
        let below = estimate_tree_co2(8.0, 10.9, 10.0);
        let above = estimate_tree_co2(8.0, 11.1, 10.0);
        let thin_rate = below / (10.9_f64 / INCH_DIVISOR).powi(2);
        let thick_rate = above / (11.1_f64 / INCH_DIVISOR).powi(2);
        assert_relative_eq!(thin_rate / thick_rate, THIN_STEM_COEFF / THICK_STEM_COEFF, epsilon = 1e-9);
        assert!(below > above * 0.9, "thin branch should not collapse the estimate");
    }

    #[test]
    fn test_shrub_model_stays_in_pounds() {
        // 2 m shrub, age 3: sphere volume × density scaling × 1.2
        let volume = 4.0 / 3.0 * PI * 1.0_f64.powi(3);
        let green = volume * (25.0 / 2.0) * 1.2;
        let expected = 3.67 * 0.5 * 0.725 * green / 3.0;
        assert_relative_eq!(estimate_shrub_co2(2.0, 3.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_herb_estimate_positive_for_bulb() {
        let co2 = estimate_sequestration(GrowthHabit::parse("Bulb"), Some(0.5), None);
        assert!(co2.is_some());
        assert!(co2.unwrap() > 0.0);
    }

    #[test]
    fn test_missing_height_or_habit_yields_none() {
        assert_eq!(estimate_sequestration(GrowthHabit::Tree, None, None), None);
        assert_eq!(
            estimate_sequestration(GrowthHabit::Unrecognized, Some(1.0), None),
            None
        );
    }

    #[test]
    fn test_estimate_independent_of_site() {
        // Two trees of equal height produce equal estimates regardless of
        // everything else
        let a = estimate_sequestration(GrowthHabit::Tree, Some(10.0), None);
        let b = estimate_sequestration(GrowthHabit::Tree, Some(10.0), None);
        assert_eq!(a, b);
    }
}
