//! Ranking Engine
//!
//! Orchestrates a search request: filter the candidate set, score every
//! eligible record, shuffle to break score ties without input-order bias,
//! stable-sort, truncate to the top N, and annotate the survivors with a
//! carbon sequestration estimate.
//!
//! Two entry points: attribute search against a derived [`SiteProfile`]
//! and fuzzy free-text name search. Both take the random source as an
//! argument so concurrent calls stay independent and tests can inject a
//! seeded generator.

use crate::carbon::{estimate_sequestration, GrowthHabit};
use crate::data::{PlantCatalog, PlantRecord};
use crate::scorer::{attribute_score, SORT_DESCENDING};
use crate::site::SiteProfile;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Result count for attribute search
pub const ATTRIBUTE_TOP_N: usize = 10;

/// Result count for name search
pub const NAME_TOP_N: usize = 3;

/// A ranked catalog entry: the record plus its match score and carbon
/// estimate. Serializes as the record's fields with `score` and
/// `reduc_in_CO2` alongside.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub record: PlantRecord,

    /// Composite match score (attribute search) or fuzzy name score
    pub score: f64,

    /// Estimated CO2 sequestration; None when the habit has no biomass
    /// model or the height is unknown
    #[serde(rename = "reduc_in_CO2")]
    pub co2_estimate: Option<f64>,
}

/// Rank candidates against a site profile.
///
/// Records matching the site on none of the four attributes are dropped
/// before scoring; an empty result is normal, not an error.
pub fn rank_by_attributes(
    candidates: &[PlantRecord],
    site: &SiteProfile,
    top_n: usize,
    rng: &mut impl Rng,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .par_iter()
        .filter(|record| record.matches_site(site))
        .map(|record| ScoredCandidate {
            record: record.clone(),
            score: attribute_score(record, site),
            co2_estimate: None,
        })
        .collect();

    tracing::debug!(
        eligible = scored.len(),
        total = candidates.len(),
        "attribute pre-filter"
    );

    finish_ranking(&mut scored, top_n, rng);
    scored
}

/// Rank candidates against a free-text name query.
///
/// The fuzzy score sums the Jaro similarity of the lowercased query
/// against the common name and the latin name; a missing name contributes
/// nothing.
pub fn rank_by_name(
    candidates: &[PlantRecord],
    query: &str,
    top_n: usize,
    rng: &mut impl Rng,
) -> Vec<ScoredCandidate> {
    let query = query.to_lowercase();

    let mut scored: Vec<ScoredCandidate> = candidates
        .par_iter()
        .map(|record| {
            let common = name_affinity(record.common_name.as_deref(), &query);
            let latin = name_affinity(Some(record.latin_name.as_str()), &query);
            ScoredCandidate {
                record: record.clone(),
                score: common + latin,
                co2_estimate: None,
            }
        })
        .collect();

    finish_ranking(&mut scored, top_n, rng);
    scored
}

/// Jaro similarity of a lowercased name against an already-lowercased
/// query; 0 for a missing name
fn name_affinity(name: Option<&str>, query: &str) -> f64 {
    match name {
        Some(name) => strsim::jaro(&name.to_lowercase(), query),
        None => 0.0,
    }
}

/// Shuffle, stable-sort by score, truncate, attach carbon estimates.
///
/// The shuffle runs before the sort so candidates with equal scores land
/// in random relative order; the sort itself is stable and preserves that
/// order. Sort direction comes from [`SORT_DESCENDING`].
fn finish_ranking(scored: &mut Vec<ScoredCandidate>, top_n: usize, rng: &mut impl Rng) {
    scored.shuffle(rng);
    scored.sort_by(|a, b| {
        let ord = a.score.total_cmp(&b.score);
        if SORT_DESCENDING {
            ord.reverse()
        } else {
            ord
        }
    });
    scored.truncate(top_n);

    for candidate in scored.iter_mut() {
        candidate.co2_estimate = estimate_sequestration(
            GrowthHabit::parse(&candidate.record.habit),
            candidate.record.height_m,
            candidate.record.diameter_cm,
        );
    }
}

/// Sort-order sanity used by tests and callers that re-sort merged pages
pub fn rank_order(a: f64, b: f64) -> Ordering {
    if SORT_DESCENDING {
        b.total_cmp(&a)
    } else {
        a.total_cmp(&b)
    }
}

// ============================================================================
// Coordinator
// ============================================================================

/// Owns the loaded catalog and runs both search flavours with the
/// standard result counts.
pub struct PlantMatcher {
    catalog: PlantCatalog,
}

impl PlantMatcher {
    pub fn new(catalog: PlantCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    /// Attribute search: top [`ATTRIBUTE_TOP_N`] records for the site
    pub fn recommend(&self, site: &SiteProfile, rng: &mut impl Rng) -> Vec<ScoredCandidate> {
        let eligible = self.catalog.prefilter(site);
        tracing::info!(
            eligible = eligible.len(),
            catalog = self.catalog.len(),
            "attribute search"
        );
        rank_by_attributes(&eligible, site, ATTRIBUTE_TOP_N, rng)
    }

    /// Name search: top [`NAME_TOP_N`] records for the query
    pub fn search(&self, query: &str, rng: &mut impl Rng) -> Vec<ScoredCandidate> {
        tracing::info!(query, catalog = self.catalog.len(), "name search");
        rank_by_name(self.catalog.records(), query, NAME_TOP_N, rng)
    }
}
