use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::{Error, Result, Skip};

/// One person's entry on the overview page.
const CONTAINER_SELECTOR: &str = "div.FirstLastName";
/// First match is the name, a second one (if any) holds the academic title.
const TITLE_LINK_SELECTOR: &str = "a.OverviewTitle";
const ROOM_DETAILS_SELECTOR: &str = "div[id]";
const ROOM_DETAILS_ID: &str = r"toggleText_\d+$";
/// `Room` followed by a code like `12.A.345` (block letter) or `123.4.678` (block number).
pub const ROOM_CODE: &str = r"Room\s+([0-9]{2,3}\.(?:[A-Z]\.|[0-9]\.)[0-9]{3})";

const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    pub name: String,
    pub room: String,
}

/// The room code grammar, compiled once.
#[derive(Debug, Clone)]
pub struct RoomPattern(Regex);

impl RoomPattern {
    pub fn new() -> Result<Self> {
        Ok(Self(Regex::new(ROOM_CODE)?))
    }

    /// Returns the code of the first `Room <code>` occurrence, without the `Room` prefix.
    pub fn find<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.0
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// An entry that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Position among all candidate containers, starting at 0.
    pub position: usize,
    pub reason: Skip,
    /// Start of the entry's cleaned text, so a human can find it on the page.
    pub preview: String,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub candidates: usize,
    pub records: Vec<PersonRecord>,
    pub skipped: Vec<Skipped>,
}

pub struct Extractor {
    container: Selector,
    title_link: Selector,
    room_details: Selector,
    room_details_id: Regex,
    room: RoomPattern,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            container: create_selector(CONTAINER_SELECTOR)?,
            title_link: create_selector(TITLE_LINK_SELECTOR)?,
            room_details: create_selector(ROOM_DETAILS_SELECTOR)?,
            room_details_id: Regex::new(ROOM_DETAILS_ID)?,
            room: RoomPattern::new()?,
        })
    }

    /// Runs every candidate container through `try_extract`, in document order.
    /// A bad entry is recorded in `skipped` and never stops the pass.
    pub fn extract_all(&self, doc: &Html) -> Extraction {
        let mut extraction = Extraction::default();

        for (position, container) in doc.select(&self.container).enumerate() {
            extraction.candidates += 1;
            match self.try_extract(container) {
                Ok(record) => extraction.records.push(record),
                Err(reason) => extraction.skipped.push(Skipped {
                    position,
                    reason,
                    preview: preview(container),
                }),
            }
        }
        extraction
    }

    pub fn extract(&self, container: ElementRef) -> Option<PersonRecord> {
        self.try_extract(container).ok()
    }

    pub fn try_extract(&self, container: ElementRef) -> core::result::Result<PersonRecord, Skip> {
        let mut links = container.select(&self.title_link);

        let base_name = links
            .next()
            .map(link_text)
            .filter(|name| !name.is_empty())
            .ok_or(Skip::MissingName)?;
        let name = match links.next().map(link_text) {
            Some(title) if !title.is_empty() => format!("{title} {base_name}"),
            _ => base_name,
        };

        let details = container
            .select(&self.room_details)
            .find(|div| {
                div.value()
                    .id()
                    .is_some_and(|id| self.room_details_id.is_match(id))
            })
            .ok_or(Skip::MissingRoomDetails)?;

        let details_text = details.text().collect::<String>();
        let room = self.room.find(&details_text).ok_or(Skip::NoRoomCode)?;

        Ok(PersonRecord {
            name,
            room: room.to_string(),
        })
    }
}

/// Parses the page and extracts all people from it.
pub fn extract_people(html: &str) -> Result<Extraction> {
    let extractor = Extractor::new()?;
    let doc = Html::parse_document(html);
    Ok(extractor.extract_all(&doc))
}

/// `Html` is not `Send`, so the whole parse happens on a blocking task.
pub(crate) async fn parse_html(html: String) -> Result<Extraction> {
    spawn_blocking(move || extract_people(&html)).await?
}

/// Collapses every whitespace run into one space and trims the ends.
/// `None` gives an empty string.
pub fn clean_text(text: Option<&str>) -> String {
    text.map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseInvalidSelector(sel_str.into()))
}

/// Visible text of a link: every text node trimmed, empty ones dropped, the rest glued together.
fn link_text(link: ElementRef) -> String {
    link.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn preview(container: ElementRef) -> String {
    let text = container.text().collect::<String>();
    clean_text(Some(&text)).chars().take(PREVIEW_CHARS).collect()
}
