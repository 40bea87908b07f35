//! Fetch, extract, and fall back when nothing usable comes back

use std::io::{self, Write};

use tracing::warn;

use crate::extractors::{Listing, ListingExtractor};
use crate::fallback::sample_listings;
use crate::fetch::PageSource;

/// Where the listings of an [`ExtractionOutcome`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Live,
    Fallback,
}

/// Listings to display, tagged with the path that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub listings: Vec<Listing>,
    pub source: ListingSource,
}

impl ExtractionOutcome {
    /// True when the sample listings replaced live results
    pub fn used_fallback(&self) -> bool {
        self.source == ListingSource::Fallback
    }
}

/// Fetch-then-extract driver with the sample listings as the last resort
pub struct ListingScraper<S> {
    source: S,
    extractor: ListingExtractor,
}

impl<S: PageSource> ListingScraper<S> {
    /// Pair a page source with a compiled extractor
    pub fn new(source: S, extractor: ListingExtractor) -> Self {
        Self { source, extractor }
    }

    /// Run one live attempt, writing status lines to `out`.
    ///
    /// Any fetch failure or an empty extraction yields the sample listings.
    pub fn collect<W: Write>(&self, out: &mut W) -> io::Result<ExtractionOutcome> {
        writeln!(out, "Fetching car cover listings from OLX...")?;

        match self.source.fetch_page() {
            Ok(html) => {
                let listings = self.extractor.extract_html(&html);
                if !listings.is_empty() {
                    return Ok(ExtractionOutcome {
                        listings,
                        source: ListingSource::Live,
                    });
                }
                warn!("live extraction produced no listings");
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch search page");
                writeln!(out, "Error fetching page: {e}")?;
            }
        }

        warn!("using sample data");
        writeln!(out, "Using sample data for demonstration...")?;
        Ok(ExtractionOutcome {
            listings: sample_listings().to_vec(),
            source: ListingSource::Fallback,
        })
    }
}
