//! Secondary deal listing

use super::DealSource;
use crate::types::{Deal, Result, SearchContext};

/// Static stand-in for an additional rental search provider
pub struct SecondarySource;

impl SecondarySource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SecondarySource {
    fn default() -> Self {
        Self::new()
    }
}

impl DealSource for SecondarySource {
    fn name(&self) -> &str {
        "secondary"
    }

    fn fetch(&self, _context: &SearchContext) -> Result<Vec<Deal>> {
        Ok(list_secondary_source())
    }
}

pub fn list_secondary_source() -> Vec<Deal> {
    vec![
        Deal::new(
            "Sixt",
            "Economy - Smart ForTwo",
            86.70,
            "EUR",
            "Marseille Airport",
            4.3,
            &["Air Conditioning", "Automatic Transmission"],
        ),
        Deal::new(
            "Alamo",
            "Compact - Nissan Micra",
            91.20,
            "EUR",
            "Marseille City Center",
            4.0,
            &["Air Conditioning", "Manual Transmission", "USB Charging"],
        ),
    ]
}
