// src/extractors/entry.rs

// --- Imports ---
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::listing::models::{KeywordSet, ScholarshipRecord};
use crate::utils::error::ExtractError;

// --- Constants ---
// The metadata line reads "status | deadline | location".
const METADATA_SEGMENTS: usize = 3;
const DEADLINE_LABEL: &str = "Deadline:";

// --- CSS Selectors (Lazy Static) ---
static ENTRY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article.scholarship").expect("Failed to compile ENTRY_SELECTOR")
});

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3").expect("Failed to compile TITLE_SELECTOR"));

static DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.info").expect("Failed to compile DESCRIPTION_SELECTOR"));

static METADATA_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Failed to compile METADATA_SELECTOR"));

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.text-btn").expect("Failed to compile LINK_SELECTOR"));

/// Capability interface over one raw listing entry. The filter and extractor
/// only see these four lookups, so their contracts hold independent of the
/// concrete markup library behind them.
pub trait EntryFields {
    /// Text of the title-like node.
    fn title(&self) -> Option<String>;
    /// Text of the description block the keywords are matched against.
    fn description(&self) -> Option<String>;
    /// The single pipe-delimited "status | deadline | location" line.
    fn metadata_line(&self) -> Option<String>;
    /// Address attribute of the application link.
    fn link_href(&self) -> Option<String>;
}

/// Production `EntryFields` backed by a parsed listing block.
pub struct HtmlEntry<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlEntry<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    fn select_text(&self, selector: &Selector) -> Option<String> {
        self.element.select(selector).next().map(collect_text)
    }
}

impl EntryFields for HtmlEntry<'_> {
    fn title(&self) -> Option<String> {
        self.select_text(&TITLE_SELECTOR)
    }

    fn description(&self) -> Option<String> {
        self.select_text(&DESCRIPTION_SELECTOR)
    }

    fn metadata_line(&self) -> Option<String> {
        self.select_text(&METADATA_SELECTOR)
    }

    fn link_href(&self) -> Option<String> {
        self.element
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(|href| href.to_string())
    }
}

/// Collects an element's text content, normalizing non-breaking spaces.
fn collect_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

// --- Main Extractor Structure ---
pub struct ListingExtractor;

impl ListingExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Keyword filter: true if the entry's description contains at least one
    /// keyword. Entries without a description block never match.
    pub fn matches_keywords(&self, entry: &impl EntryFields, keywords: &KeywordSet) -> bool {
        match entry.description() {
            Some(description) => keywords.matches(&description),
            None => false,
        }
    }

    /// Field extractor: builds a record from one entry, or fails for that
    /// entry alone. Name and URL are trimmed, nothing else is normalized.
    pub fn extract_record(
        &self,
        entry: &impl EntryFields,
    ) -> Result<ScholarshipRecord, ExtractError> {
        let name = entry.title().ok_or(ExtractError::MissingField("title"))?;
        let metadata = entry
            .metadata_line()
            .ok_or(ExtractError::MissingField("metadata line"))?;
        let url = entry.link_href().ok_or(ExtractError::MissingField("link"))?;

        let deadline = deadline_segment(&metadata)?;

        Ok(ScholarshipRecord {
            name: name.trim().to_string(),
            deadline,
            url: url.trim().to_string(),
        })
    }

    /// Runs the keyword filter and field extractor over every listing block
    /// in one page of markup. Malformed entries are logged and skipped; they
    /// never abort the page.
    pub fn extract_page(&self, html: &str, keywords: &KeywordSet) -> Vec<ScholarshipRecord> {
        let document = Html::parse_document(html);

        let mut records = Vec::new();
        for element in document.select(&ENTRY_SELECTOR) {
            let entry = HtmlEntry::new(element);

            if !self.matches_keywords(&entry, keywords) {
                continue;
            }

            match self.extract_record(&entry) {
                Ok(record) => {
                    tracing::debug!("Extracted listing entry: {}", record.name);
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed listing entry: {}", e);
                }
            }
        }

        records
    }
}

/// Locates the deadline inside the "status | deadline | location" line:
/// split on `|`, require exactly three segments, strip the literal label
/// prefix from the middle one.
fn deadline_segment(line: &str) -> Result<String, ExtractError> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() != METADATA_SEGMENTS {
        return Err(ExtractError::MalformedMetadata(segments.len()));
    }

    let deadline = segments[1].trim();
    let deadline = deadline.strip_prefix(DEADLINE_LABEL).unwrap_or(deadline);

    Ok(deadline.trim().to_string())
}
