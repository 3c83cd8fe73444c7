use chrono::Local;
use clap::Parser;
use faculty_rooms::{error_time, info_time, process::process_site, Config};

/// Failures are reported, never turned into a crash or an exit code.
#[tokio::main]
async fn main() {
    let start_time = Local::now();
    let config = Config::parse();

    match process_site(&config).await {
        Ok(summary) => info_time!(
            start_time,
            "Full program time: {} of {} entries saved",
            summary.records,
            summary.candidates
        ),
        Err(e) => error_time!("An error occurred: {e}"),
    }
}
