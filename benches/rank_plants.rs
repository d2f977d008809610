//! Attribute-ranking benchmark over a synthetic catalog.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plant_matcher_rust::classify::{MoistureClass, PhClass, SoilClass};
use plant_matcher_rust::rank::{rank_by_attributes, ATTRIBUTE_TOP_N};
use plant_matcher_rust::{PlantRecord, SiteProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SOIL_CODES: &[&str] = &["L", "LM", "LMH", "MH", "H"];
const MOISTURE_CODES: &[&str] = &["D", "DM", "M", "MWe", "We"];
const PH_CODES: &[&str] = &["A", "AN", "ANB", "NB", "B"];
const HABITS: &[&str] = &["Tree", "Shrub", "Perennial", "Annual", "Bulb"];

fn synthetic_catalog(n: usize) -> Vec<PlantRecord> {
    (0..n)
        .map(|i| PlantRecord {
            latin_name: format!("Plantus synthetica no{}", i),
            common_name: Some(format!("Synthetic plant {}", i)),
            habit: HABITS[i % HABITS.len()].to_string(),
            height_m: Some(0.5 + (i % 20) as f64),
            diameter_cm: None,
            hardiness: (i % 11) as u8,
            soil: SOIL_CODES[i % SOIL_CODES.len()].to_string(),
            moisture: MOISTURE_CODES[i % MOISTURE_CODES.len()].to_string(),
            ph: PH_CODES[i % PH_CODES.len()].to_string(),
            family: None,
            medicinal: None,
            range: None,
            habitat: None,
            cultivation: None,
            uses: None,
            propagation: None,
        })
        .collect()
}

fn bench_rank_by_attributes(c: &mut Criterion) {
    let site = SiteProfile {
        hardiness_zone: 5,
        moisture: MoistureClass::Moist,
        soil: SoilClass::MediumHeavy,
        ph: PhClass::AcidNeutralBasic,
    };

    for size in [100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        c.bench_function(&format!("rank_by_attributes/{}", size), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let ranked =
                    rank_by_attributes(black_box(&catalog), &site, ATTRIBUTE_TOP_N, &mut rng);
                black_box(ranked)
            })
        });
    }
}

criterion_group!(benches, bench_rank_by_attributes);
criterion_main!(benches);
