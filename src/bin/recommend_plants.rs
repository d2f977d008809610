//! Recommend Plants
//!
//! Stand-in for the HTTP caller: loads a plant catalog file and runs one
//! search against it, printing the ranked results as JSON.
//!
//! Attribute search (readings as delivered by the climate/soil providers):
//!   recommend_plants <catalog.csv> attrib <temp_c> <rain_mm_day> <sand> <silt> <clay> <ph>
//!
//! Name search:
//!   recommend_plants <catalog.csv> search <name...>

use anyhow::{bail, Context, Result};
use plant_matcher_rust::site::{SiteProfile, SiteReadings};
use plant_matcher_rust::{PlantCatalog, PlantMatcher};

fn parse_reading(args: &[String], idx: usize, field: &'static str) -> Result<f64> {
    args.get(idx)
        .with_context(|| format!("missing argument: {}", field))?
        .parse::<f64>()
        .with_context(|| format!("argument '{}' is not a number", field))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!(
            "usage: {0} <catalog.csv> attrib <temp_c> <rain_mm_day> <sand> <silt> <clay> <ph>\n       {0} <catalog.csv> search <name...>",
            args[0]
        );
    }

    let catalog_path = &args[1];
    let catalog = if catalog_path.ends_with(".parquet") {
        PlantCatalog::from_parquet(catalog_path)?
    } else {
        PlantCatalog::from_csv(catalog_path)?
    };
    let matcher = PlantMatcher::new(catalog);
    let mut rng = rand::thread_rng();

    let results = match args[2].as_str() {
        "attrib" => {
            let readings = SiteReadings {
                name: "request site".to_string(),
                mean_temp_c: parse_reading(&args, 3, "temp_c")?,
                mean_daily_rain_mm: parse_reading(&args, 4, "rain_mm_day")?,
                sand_g_kg: parse_reading(&args, 5, "sand")?,
                silt_g_kg: parse_reading(&args, 6, "silt")?,
                clay_g_kg: parse_reading(&args, 7, "clay")?,
                ph: parse_reading(&args, 8, "ph")?,
            };
            let site = SiteProfile::from_readings(&readings)?;
            println!(
                "Site profile: zone {}, moisture {}, soil {}, pH {}\n",
                site.hardiness_zone,
                site.moisture.code(),
                site.soil.code(),
                site.ph.code()
            );
            matcher.recommend(&site, &mut rng)
        }
        "search" => {
            let query = args[3..].join(" ");
            if query.trim().is_empty() {
                bail!("search needs a name to look for");
            }
            matcher.search(&query, &mut rng)
        }
        other => bail!("unknown mode '{}', expected 'attrib' or 'search'", other),
    };

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
