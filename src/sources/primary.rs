//! Primary deal listing

use super::DealSource;
use crate::types::{Deal, Result, SearchContext};

/// Static stand-in for the main rental search provider
pub struct PrimarySource;

impl PrimarySource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrimarySource {
    fn default() -> Self {
        Self::new()
    }
}

impl DealSource for PrimarySource {
    fn name(&self) -> &str {
        "primary"
    }

    fn fetch(&self, _context: &SearchContext) -> Result<Vec<Deal>> {
        Ok(list_primary_source())
    }
}

/// The five primary offers, in listing order
pub fn list_primary_source() -> Vec<Deal> {
    vec![
        Deal::new(
            "Europcar",
            "Economy - Peugeot 108",
            89.50,
            "EUR",
            "Marseille Airport",
            4.2,
            &["Air Conditioning", "Manual Transmission"],
        ),
        Deal::new(
            "Hertz",
            "Compact - Renault Clio",
            95.80,
            "EUR",
            "Marseille City Center",
            4.5,
            &["Air Conditioning", "Automatic Transmission"],
        ),
        Deal::new(
            "Avis",
            "Economy - Citroën C1",
            82.30,
            "EUR",
            "Marseille Saint-Charles Station",
            4.1,
            &["Air Conditioning", "Manual Transmission", "GPS"],
        ),
        Deal::new(
            "Enterprise",
            "Intermediate - Volkswagen Golf",
            112.40,
            "EUR",
            "Marseille Airport",
            4.4,
            &["Air Conditioning", "Manual Transmission", "Bluetooth"],
        ),
        Deal::new(
            "Budget",
            "Economy - Fiat Panda",
            78.90,
            "EUR",
            "Marseille City Center",
            3.9,
            &["Air Conditioning", "Manual Transmission"],
        ),
    ]
}
