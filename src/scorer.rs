//! Similarity Scorer
//!
//! Computes the composite match score between a plant record's stored
//! attribute codes and a derived site profile. The score is the sum of a
//! hardiness deviation term and three character-level string-similarity
//! ratios (soil, moisture, pH), each in [0, 1].
//!
//! The hardiness term is a penalty: it grows with the distance between the
//! record's rating and the site's zone. The ranking nevertheless keeps the
//! candidates with the *highest* composite score (see [`SORT_DESCENDING`]).

use crate::data::PlantRecord;
use crate::site::SiteProfile;

/// Rank ordering applied to composite scores. `true` keeps the highest
/// totals first. The ranking engine reads the direction from here only, so
/// a polarity change is a one-constant edit.
pub const SORT_DESCENDING: bool = true;

// ============================================================================
// Sequence Similarity
// ============================================================================

/// Longest common run between two character slices: (start_a, start_b, len)
/// with ties resolved to the earliest run in `a`, then in `b`.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0usize, 0usize, 0usize);
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut k = 0;
            while i + k < a.len() && j + k < b.len() && a[i + k] == b[j + k] {
                k += 1;
            }
            if k > best.2 {
                best = (i, j, k);
            }
        }
    }
    best
}

/// Total characters covered by matching blocks: the longest common run
/// plus, recursively, the matches to its left and right.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, k) = longest_common_run(a, b);
    if k == 0 {
        return 0;
    }
    k + matched_chars(&a[..i], &b[..j]) + matched_chars(&a[i + k..], &b[j + k..])
}

/// Character-level sequence similarity in [0, 1].
///
/// Ratio of matching-block coverage to combined length: 1.0 for identical
/// strings, 0.0 for strings sharing no character runs. Two empty strings
/// count as identical.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let combined = a.len() + b.len();
    if combined == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / combined as f64
}

// ============================================================================
// Composite Score
// ============================================================================

/// Composite attribute match score for one candidate.
///
/// hardiness deviation ratio + soil ratio + moisture ratio + pH ratio.
/// A site in zone 0 would divide by zero, so the deviation degrades to the
/// raw absolute difference there.
pub fn attribute_score(record: &PlantRecord, site: &SiteProfile) -> f64 {
    let zone = site.hardiness_zone as f64;
    let deviation = (record.hardiness as f64 - zone).abs();
    let hardiness_term = if site.hardiness_zone == 0 {
        deviation
    } else {
        deviation / zone
    };

    let soil_term = sequence_ratio(&record.soil, site.soil.code());
    let moisture_term = sequence_ratio(&record.moisture, site.moisture.code());
    let ph_term = sequence_ratio(&record.ph, site.ph.code());

    hardiness_term + soil_term + moisture_term + ph_term
}
