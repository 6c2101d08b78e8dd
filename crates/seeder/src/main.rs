//! One-shot catalog seeder.
//!
//! Reads the JSON data files shipped next to this crate and loads them
//! through the idempotent seed services. Safe to re-run; existing rows are
//! counted, not duplicated.

use database::db::create_connection;
use database::services::seed::{CentreEntry, ElectiveEntry, SeedReport, SeedService};
use log::{info, warn};
use std::path::{Path, PathBuf};

fn data_dir() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

fn log_report(label: &str, report: &SeedReport) {
    info!(
        "{label}: {} created, {} existing, {} skipped",
        report.created,
        report.existing,
        report.skipped.len()
    );
    for line in &report.skipped {
        warn!("{label}: skipped {line}");
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let dir = data_dir();
    let electives: Vec<ElectiveEntry> = serde_json::from_str(
        &std::fs::read_to_string(dir.join("electives.json")).expect("Failed to read electives.json"),
    )
    .expect("Malformed electives.json");
    let centres: Vec<CentreEntry> = serde_json::from_str(
        &std::fs::read_to_string(dir.join("study_centres.json"))
            .expect("Failed to read study_centres.json"),
    )
    .expect("Malformed study_centres.json");

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");

    let report = SeedService::load_electives(&db, &electives)
        .await
        .expect("Elective seed failed");
    log_report("electives", &report);

    let report = SeedService::load_centres(&db, &centres)
        .await
        .expect("Study centre seed failed");
    log_report("study centres", &report);
}
