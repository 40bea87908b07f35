//! CSS selector helpers
//!
//! Uses the scraper crate to select elements by CSS selectors.

use scraper::{ElementRef, Selector};

use crate::error::ExtractError;

/// Parse a CSS selector, keeping the source text in the error
pub fn compile_selector(selector_str: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector_str).map_err(|e| ExtractError::InvalidSelector {
        selector: selector_str.to_string(),
        reason: e.to_string(),
    })
}

/// Text content of an element with whitespace runs collapsed
pub fn element_text(element: ElementRef<'_>) -> String {
    let text = element.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first descendant matching `selector`, if it is non-empty
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let element = scope.select(selector).next()?;
    let text = element_text(element);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
