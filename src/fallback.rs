//! Sample listings shown when live extraction yields nothing

use std::sync::LazyLock;

use crate::extractors::Listing;

const SAMPLE_DATA: [(&str, &str, &str); 5] = [
    (
        "Waterproof Car Cover for Sedan - Universal Size",
        "Brand new waterproof car cover, fits all sedan cars",
        "₹1,200",
    ),
    (
        "Premium SUV Car Cover - All Weather Protection",
        "Heavy duty cover with UV protection for SUVs",
        "₹2,500",
    ),
    (
        "Car Cover with Mirror Pockets - Medium Size",
        "Universal car cover with separate mirror pockets",
        "₹899",
    ),
    (
        "Luxury Car Cover for BMW/Mercedes/Audi",
        "Custom fit premium car cover with soft lining",
        "₹3,800",
    ),
    (
        "Budget Car Cover - Small Car Size",
        "Economical car cover for small cars",
        "₹599",
    ),
];

static SAMPLE_LISTINGS: LazyLock<Vec<Listing>> = LazyLock::new(|| {
    SAMPLE_DATA
        .iter()
        .map(|(title, description, price)| Listing::from_static(title, description, price))
        .collect()
});

pub fn sample_listings() -> &'static [Listing] {
    &SAMPLE_LISTINGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_listings() {
        let listings = sample_listings();
        assert_eq!(listings.len(), 5);
        assert_eq!(listings[2].title(), "Car Cover with Mirror Pockets - Medium Size");
        assert_eq!(listings[4].description(), "Economical car cover for small cars");

        let prices: Vec<&str> = listings.iter().map(|l| l.price()).collect();
        assert_eq!(prices, vec!["₹1,200", "₹2,500", "₹899", "₹3,800", "₹599"]);
    }

    #[test]
    fn test_sample_listings_are_shared() {
        assert!(std::ptr::eq(sample_listings(), sample_listings()));
    }
}
