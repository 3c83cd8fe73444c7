use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://medien.hs-duesseldorf.de";
pub const DEFAULT_OVERVIEW_PATH: &str = "/personen/Seiten/uebersicht_en.aspx";
pub const DEFAULT_OUTPUT_PATH: &str = "faculty_data.json";
/// Plain desktop browser identity, the site turns away obvious bots.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Everything a run needs. Defaults reproduce the fixed faculty overview scrape.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "faculty_rooms",
    about = "Scrape faculty names and office rooms into a JSON file"
)]
pub struct Config {
    /// Site the overview page lives on
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Path of the people overview page, relative to the base URL
    #[arg(long, default_value = DEFAULT_OVERVIEW_PATH)]
    pub overview_path: String,
    /// Where the JSON records are written (replaced if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,
    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// Print a line for every entry that was skipped
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            overview_path: DEFAULT_OVERVIEW_PATH.into(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn overview_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.overview_path)?)
    }
}
