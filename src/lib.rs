//! Classifieds listing scraper
//!
//! Fetches a search results page, extracts title/description/price triples
//! through a cascade of CSS selectors and prints them as a table:
//! - `fetch`: one blocking GET with browser-like headers
//! - `extractors`: selector plans and the listing cascade
//! - `fallback`: sample listings used when live extraction yields nothing
//! - `report`: console table rendering

pub mod config;
pub mod error;
pub mod extractors;
pub mod fallback;
pub mod fetch;
pub mod pipeline;
pub mod report;

pub use config::ScraperConfig;
pub use error::{Error, ExtractError, FetchError, Result};
pub use extractors::{Field, FieldSelector, Listing, ListingExtractor, ListingPlan};
pub use fetch::{HttpFetcher, PageSource};
pub use pipeline::{ExtractionOutcome, ListingScraper, ListingSource};

use std::io::Write;

/// Scrape the configured search page and print the listings table to stdout
pub fn run(config: &ScraperConfig) -> Result<ExtractionOutcome> {
    let fetcher = HttpFetcher::new(config)?;
    let extractor = ListingExtractor::olx()?;
    let scraper = ListingScraper::new(fetcher, extractor);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = scraper.collect(&mut out)?;
    report::write_report(&mut out, &outcome.listings)?;
    out.flush()?;

    Ok(outcome)
}
