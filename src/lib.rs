//! Plant Matcher
//!
//! Scoring engine for a garden plant recommendation service. Given a
//! site's climate and soil readings it derives a categorical site profile,
//! ranks catalog plants by attribute similarity, and annotates the top
//! matches with an estimated CO2 sequestration figure. A second path ranks
//! the catalog against a free-text name query.
//!
//! Module layout:
//! - `classify/`: raw readings → hardiness zone, moisture, texture, pH
//! - `site`: site readings and the derived [`SiteProfile`]
//! - `data`: the in-memory plant catalog (Polars-backed loaders)
//! - `scorer`: composite similarity score and the sequence-ratio primitive
//! - `carbon`: habit-dispatched CO2 sequestration models
//! - `rank`: filter/score/shuffle/sort/truncate orchestration

pub mod carbon;
pub mod classify;
pub mod data;
pub mod error;
pub mod rank;
pub mod scorer;
pub mod site;

// Re-export commonly used types
pub use carbon::{estimate_sequestration, GrowthHabit};
pub use classify::{MoistureClass, PhClass, SoilClass};
pub use data::{PlantCatalog, PlantRecord};
pub use rank::{rank_by_attributes, rank_by_name, PlantMatcher, ScoredCandidate};
pub use scorer::{attribute_score, sequence_ratio};
pub use site::{SiteProfile, SiteReadings};
