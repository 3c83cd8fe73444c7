use std::path::PathBuf;

use chrono::Local;

use crate::parse::parse_html;
use crate::request::{build_client, request_overview_html};
use crate::write::write_records;
use crate::{info_time, Config, Result};

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub candidates: usize,
    pub records: usize,
    pub skipped: usize,
    pub output_path: PathBuf,
}

/// Fetches the overview page, extracts every person with a room and writes them to
/// `config.output_path`. Nothing is written if the fetch fails.
pub async fn process_site(config: &Config) -> Result<Summary> {
    let start_time = Local::now();
    info_time!("Started scraping");

    let client = build_client(config)?;
    let html = request_overview_html(&client, config).await?;
    info_time!(start_time, "Fetched overview page: {} bytes", html.len());

    let extraction = parse_html(html).await?;
    info_time!("Found {} people to process", extraction.candidates);

    for record in &extraction.records {
        info_time!("Successfully processed: {}", record.name);
    }
    if config.verbose {
        for skipped in &extraction.skipped {
            info_time!(
                "Skipped entry {} ({}): {}",
                skipped.position,
                skipped.reason,
                skipped.preview
            );
        }
    }

    write_records(&config.output_path, &extraction.records).await?;
    info_time!(
        start_time,
        "Successfully processed {} faculty members\nData saved to {}",
        extraction.records.len(),
        config.output_path.display()
    );

    Ok(Summary {
        candidates: extraction.candidates,
        records: extraction.records.len(),
        skipped: extraction.skipped.len(),
        output_path: config.output_path.clone(),
    })
}
