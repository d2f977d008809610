//! Plant Catalog
//!
//! Loads the plant table into memory with Polars and exposes it as plain
//! `PlantRecord` rows. The catalog is read-only: per request the engine
//! either takes the coarse equality pre-filter (attribute search) or the
//! full table (name search).
//!
//! Rows without a latin name or a hardiness rating cannot be matched and
//! are skipped at load time.

use crate::site::SiteProfile;
use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;

// Column names as stored in the catalog table
pub const COL_LATIN: &str = "Latin name";
pub const COL_COMMON: &str = "Common name";
pub const COL_HABIT: &str = "Habit";
pub const COL_HEIGHT: &str = "Height";
pub const COL_DIAMETER: &str = "Diameter";
pub const COL_HARDINESS: &str = "UK Hardiness";
pub const COL_SOIL: &str = "Soil";
pub const COL_MOISTURE: &str = "Moisture";
pub const COL_PH: &str = "pH";
pub const COL_FAMILY: &str = "Family";
pub const COL_MEDICINAL: &str = "Medicinal";
pub const COL_RANGE: &str = "Range";
pub const COL_HABITAT: &str = "Habitat";
pub const COL_CULTIVATION: &str = "Cultivation details";
pub const COL_USES: &str = "Uses notes";
pub const COL_PROPAGATION: &str = "Propagation";

/// One catalog entry.
///
/// Matching uses `hardiness` and the three class-code strings; `habit`,
/// `height_m`, and `diameter_cm` feed the carbon estimator; the remaining
/// fields pass through to the serialized output untouched. Serde renames
/// keep the output keys identical to the catalog columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlantRecord {
    #[serde(rename = "Latin name")]
    pub latin_name: String,

    #[serde(rename = "Common name")]
    pub common_name: Option<String>,

    /// Growth habit label as stored in the catalog (e.g. "Tree",
    /// "Perennial Climber"); parsed into a closed enum for carbon dispatch
    #[serde(rename = "Habit")]
    pub habit: String,

    /// Mature height in metres
    #[serde(rename = "Height")]
    pub height_m: Option<f64>,

    /// Trunk diameter in cm, trees only
    #[serde(rename = "Diameter")]
    pub diameter_cm: Option<f64>,

    /// Hardiness zone rating, 0 (coldest tolerance) to 10
    #[serde(rename = "UK Hardiness")]
    pub hardiness: u8,

    /// Stored soil texture class code (e.g. "LMH")
    #[serde(rename = "Soil")]
    pub soil: String,

    /// Stored moisture class code (e.g. "DM")
    #[serde(rename = "Moisture")]
    pub moisture: String,

    /// Stored pH class code (e.g. "ANB")
    #[serde(rename = "pH")]
    pub ph: String,

    // Descriptive pass-through fields
    #[serde(rename = "Family")]
    pub family: Option<String>,
    #[serde(rename = "Medicinal")]
    pub medicinal: Option<String>,
    #[serde(rename = "Range")]
    pub range: Option<String>,
    #[serde(rename = "Habitat")]
    pub habitat: Option<String>,
    #[serde(rename = "Cultivation details")]
    pub cultivation: Option<String>,
    #[serde(rename = "Uses notes")]
    pub uses: Option<String>,
    #[serde(rename = "Propagation")]
    pub propagation: Option<String>,
}

impl PlantRecord {
    /// Coarse eligibility check for attribute search: the record must
    /// match the site on at least one of hardiness, soil, moisture, or pH.
    /// Equality only; the fine-grained ordering is the scorer's job.
    pub fn matches_site(&self, site: &SiteProfile) -> bool {
        self.hardiness == site.hardiness_zone
            || self.soil == site.soil.code()
            || self.moisture == site.moisture.code()
            || self.ph == site.ph.code()
    }
}

/// In-memory plant catalog with a latin-name index.
pub struct PlantCatalog {
    records: Vec<PlantRecord>,
    by_latin: FxHashMap<String, usize>,
}

impl PlantCatalog {
    /// Load the catalog from a CSV export of the plant table
    pub fn from_csv(path: &str) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {}", path))?
            .finish()
            .with_context(|| format!("Failed to load plant catalog CSV: {}", path))?;

        let catalog = Self::from_dataframe(&df)
            .with_context(|| format!("Failed to extract plant records from {}", path))?;
        tracing::info!(path, rows = catalog.len(), "loaded plant catalog");
        Ok(catalog)
    }

    /// Load the catalog from a Parquet file
    pub fn from_parquet(path: &str) -> Result<Self> {
        let df = LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to scan parquet: {}", path))?
            .collect()
            .with_context(|| format!("Failed to load plant catalog parquet: {}", path))?;

        let catalog = Self::from_dataframe(&df)
            .with_context(|| format!("Failed to extract plant records from {}", path))?;
        tracing::info!(path, rows = catalog.len(), "loaded plant catalog");
        Ok(catalog)
    }

    /// Build a catalog from already-materialized records (tests, callers
    /// with their own storage layer)
    pub fn from_records(records: Vec<PlantRecord>) -> Self {
        let by_latin = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.latin_name.clone(), idx))
            .collect();
        Self { records, by_latin }
    }

    /// Extract records from a loaded table
    fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let n = df.height();

        let latin = str_col(df, COL_LATIN)
            .with_context(|| format!("Column '{}' missing or not readable as text", COL_LATIN))?;
        let hardiness_col = df
            .column(COL_HARDINESS)
            .with_context(|| format!("Column '{}' not found", COL_HARDINESS))?
            .cast(&DataType::Float64)
            .with_context(|| format!("Column '{}' is not numeric", COL_HARDINESS))?;
        let hardiness = hardiness_col
            .f64()
            .with_context(|| format!("Column '{}' is not numeric", COL_HARDINESS))?;

        let common = str_col(df, COL_COMMON);
        let habit = str_col(df, COL_HABIT);
        let soil = str_col(df, COL_SOIL);
        let moisture = str_col(df, COL_MOISTURE);
        let ph = str_col(df, COL_PH);
        let family = str_col(df, COL_FAMILY);
        let medicinal = str_col(df, COL_MEDICINAL);
        let range = str_col(df, COL_RANGE);
        let habitat = str_col(df, COL_HABITAT);
        let cultivation = str_col(df, COL_CULTIVATION);
        let uses = str_col(df, COL_USES);
        let propagation = str_col(df, COL_PROPAGATION);

        let height = f64_col(df, COL_HEIGHT);
        let diameter = f64_col(df, COL_DIAMETER);

        let latin = latin
            .str()
            .with_context(|| format!("Column '{}' is not a string column", COL_LATIN))?;

        let mut records = Vec::with_capacity(n);
        let mut skipped = 0usize;

        for i in 0..n {
            let latin_name = match latin.get(i) {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            let hardiness = match hardiness.get(i) {
                Some(h) if h.is_finite() && h >= 0.0 => h.round() as u8,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            records.push(PlantRecord {
                latin_name,
                common_name: opt_str(&common, i),
                habit: opt_str(&habit, i).unwrap_or_default(),
                height_m: opt_f64(&height, i),
                diameter_cm: opt_f64(&diameter, i),
                hardiness,
                soil: opt_str(&soil, i).unwrap_or_default(),
                moisture: opt_str(&moisture, i).unwrap_or_default(),
                ph: opt_str(&ph, i).unwrap_or_default(),
                family: opt_str(&family, i),
                medicinal: opt_str(&medicinal, i),
                range: opt_str(&range, i),
                habitat: opt_str(&habitat, i),
                cultivation: opt_str(&cultivation, i),
                uses: opt_str(&uses, i),
                propagation: opt_str(&propagation, i),
            });
        }

        if skipped > 0 {
            tracing::warn!(skipped, "skipped catalog rows without latin name or hardiness");
        }

        Ok(Self::from_records(records))
    }

    /// Full record list, catalog order
    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by latin name
    pub fn get(&self, latin_name: &str) -> Option<&PlantRecord> {
        self.by_latin.get(latin_name).map(|&idx| &self.records[idx])
    }

    /// The catalog side of the attribute-search contract: every record
    /// matching the site on at least one attribute, catalog order.
    pub fn prefilter(&self, site: &SiteProfile) -> Vec<PlantRecord> {
        self.records
            .iter()
            .filter(|r| r.matches_site(site))
            .cloned()
            .collect()
    }
}

// ============================================================================
// Column helpers
// ============================================================================

/// Owned, string-castable column handle. None when the column is absent
/// entirely; catalog exports drop some descriptive columns, and their rows
/// then all read as None.
fn str_col(df: &DataFrame, name: &str) -> Option<Column> {
    df.column(name).ok()?.cast(&DataType::String).ok()
}

fn f64_col(df: &DataFrame, name: &str) -> Option<Column> {
    df.column(name).ok()?.cast(&DataType::Float64).ok()
}

fn opt_str(col: &Option<Column>, idx: usize) -> Option<String> {
    let chunked = col.as_ref()?.str().ok()?;
    chunked
        .get(idx)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn opt_f64(col: &Option<Column>, idx: usize) -> Option<f64> {
    let chunked = col.as_ref()?.f64().ok()?;
    chunked.get(idx).filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{MoistureClass, PhClass, SoilClass};

    fn record(latin: &str, hardiness: u8, soil: &str, moisture: &str, ph: &str) -> PlantRecord {
        PlantRecord {
            latin_name: latin.to_string(),
            common_name: None,
            habit: "Tree".to_string(),
            height_m: Some(10.0),
            diameter_cm: None,
            hardiness,
            soil: soil.to_string(),
            moisture: moisture.to_string(),
            ph: ph.to_string(),
            family: None,
            medicinal: None,
            range: None,
            habitat: None,
            cultivation: None,
            uses: None,
            propagation: None,
        }
    }

    fn site() -> SiteProfile {
        SiteProfile {
            hardiness_zone: 5,
            moisture: MoistureClass::Moist,
            soil: SoilClass::MediumHeavy,
            ph: PhClass::AcidNeutralBasic,
        }
    }

    #[test]
    fn test_matches_site_is_an_or_filter() {
        let site = site();
        // Hardiness alone qualifies
        assert!(record("a", 5, "L", "D", "A").matches_site(&site));
        // Soil alone qualifies
        assert!(record("b", 0, "MH", "D", "A").matches_site(&site));
        // Moisture alone qualifies
        assert!(record("c", 0, "L", "M", "A").matches_site(&site));
        // pH alone qualifies
        assert!(record("d", 0, "L", "D", "ANB").matches_site(&site));
        // Nothing matches
        assert!(!record("e", 0, "L", "D", "A").matches_site(&site));
    }

    #[test]
    fn test_prefilter_and_lookup() {
        let catalog = PlantCatalog::from_records(vec![
            record("Quercus robur", 5, "LMH", "DM", "ANB"),
            record("Rosa canina", 3, "L", "D", "A"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Rosa canina").is_some());
        assert!(catalog.get("Nonexistent").is_none());

        let eligible = catalog.prefilter(&site());
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].latin_name, "Quercus robur");
    }
}
