//! Selector cascade over listing containers

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use super::css_extractor::{compile_selector, first_text};
use super::{Field, Listing, ListingPlan};
use crate::error::ExtractError;

/// A compiled [`ListingPlan`]
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    containers: Vec<(String, Selector)>,
    fields: Vec<(Field, Selector)>,
}

impl ListingExtractor {
    pub fn new(plan: &ListingPlan) -> Result<Self, ExtractError> {
        let containers = plan
            .containers
            .iter()
            .map(|s| Ok((s.clone(), compile_selector(s)?)))
            .collect::<Result<Vec<_>, ExtractError>>()?;

        let fields = plan
            .fields
            .iter()
            .map(|fs| Ok((fs.field, compile_selector(&fs.selector)?)))
            .collect::<Result<Vec<_>, ExtractError>>()?;

        Ok(Self { containers, fields })
    }

    pub fn olx() -> Result<Self, ExtractError> {
        Self::new(&ListingPlan::olx())
    }

    /// Parse `html` and extract listings from it
    pub fn extract_html(&self, html: &str) -> Vec<Listing> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// Extract every titled listing from the first container family that matches.
    /// Returns an empty list when nothing usable is found.
    pub fn extract(&self, document: &Html) -> Vec<Listing> {
        let Some((selector, elements)) = self.match_containers(document) else {
            info!("no container selector matched");
            return vec![];
        };

        info!(selector, matched = elements.len(), "using container selector");

        let listings: Vec<Listing> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(idx, element)| match self.extract_listing(element) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    debug!(idx, error = %e, "skipping container");
                    None
                }
            })
            .collect();

        info!(count = listings.len(), "extracted listings");
        listings
    }

    /// First container selector with at least one match, with its elements
    fn match_containers<'a>(&self, document: &'a Html) -> Option<(&str, Vec<ElementRef<'a>>)> {
        self.containers.iter().find_map(|(source, selector)| {
            let elements: Vec<ElementRef<'a>> = document.select(selector).collect();
            if elements.is_empty() {
                None
            } else {
                Some((source.as_str(), elements))
            }
        })
    }

    /// Resolve each field from its selectors; the first non-empty match wins
    pub fn extract_listing(&self, container: ElementRef<'_>) -> Result<Listing, ExtractError> {
        let mut title = None;
        let mut description = None;
        let mut price = None;

        for (field, selector) in &self.fields {
            let slot = match field {
                Field::Title => &mut title,
                Field::Description => &mut description,
                Field::Price => &mut price,
            };
            if slot.is_none() {
                *slot = first_text(container, selector);
            }
        }

        let title = title.ok_or(ExtractError::MissingTitle)?;
        Listing::new(title, description, price)
    }
}
