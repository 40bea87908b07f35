//! Listing extraction
//!
//! A [`ListingPlan`] describes which CSS selectors locate listing containers
//! and, inside each container, which selectors hold each field. Plans are
//! compiled into a [`ListingExtractor`] that walks the cascade.

mod css_extractor;
mod listing_extractor;

pub use css_extractor::*;
pub use listing_extractor::*;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ExtractError};

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_PRICE: &str = "Price not listed";

/// One scraped listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ListingRecord")]
pub struct Listing {
    title: String,
    description: String,
    price: String,
}

impl Listing {
    /// Build a listing; a blank title is rejected and blank description or
    /// price fall back to their placeholders.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        price: Option<String>,
    ) -> Result<Self, ExtractError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ExtractError::MissingTitle);
        }

        Ok(Self {
            title,
            description: non_blank(description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            price: non_blank(price).unwrap_or_else(|| NO_PRICE.to_string()),
        })
    }

    pub(crate) fn from_static(title: &str, description: &str, price: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    /// Listing title, never blank
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description text or [`NO_DESCRIPTION`]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price text or [`NO_PRICE`]
    pub fn price(&self) -> &str {
        &self.price
    }
}

/// Unvalidated listing as it appears in JSON
#[derive(Deserialize)]
struct ListingRecord {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<String>,
}

impl TryFrom<ListingRecord> for Listing {
    type Error = ExtractError;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        Listing::new(record.title, record.description, record.price)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Listing attribute a field selector targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Price,
}

/// A `(field, selector)` pair; pairs for the same field are tried in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub field: Field,
    pub selector: String,
}

impl FieldSelector {
    pub fn new(field: Field, selector: impl Into<String>) -> Self {
        Self {
            field,
            selector: selector.into(),
        }
    }
}

/// Ordered selector cascade for one site layout family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPlan {
    /// Container selectors in priority order; only the first that matches is used
    pub containers: Vec<String>,
    /// Field selectors in evaluation order
    #[serde(default)]
    pub fields: Vec<FieldSelector>,
}

impl ListingPlan {
    /// Selectors covering the known OLX search result markups
    pub fn olx() -> Self {
        let containers = [
            r#"[data-cy="l-card"]"#,
            ".sc-jTzLTM",
            ".sc-htoDjs",
            r#"div[class*="listing"]"#,
            r#"li[class*="listing"]"#,
        ];
        let fields = [
            (Field::Title, "h4"),
            (Field::Title, ".sc-jlyJG"),
            (Field::Title, r#"[data-cy="listing-title"]"#),
            (Field::Description, "p"),
            (Field::Description, ".sc-jlyJG"),
            (Field::Description, ".sc-iCoHVE"),
            (Field::Price, ".sc-bZQynM"),
            (Field::Price, ".sc-iIgjLs"),
            (Field::Price, r#"[data-cy="listing-price"]"#),
        ];

        Self {
            containers: containers.iter().map(|s| s.to_string()).collect(),
            fields: fields
                .iter()
                .map(|(field, sel)| FieldSelector::new(*field, *sel))
                .collect(),
        }
    }

    /// Parse a plan from its JSON description
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Selectors for one field, in evaluation order
    pub fn selectors_for(&self, field: Field) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(move |fs| fs.field == field)
            .map(|fs| fs.selector.as_str())
    }
}

impl Default for ListingPlan {
    fn default() -> Self {
        Self::olx()
    }
}
