//! Deal and search types

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of every simulated rental, in days
pub const RENTAL_DAYS: i64 = 2;

/// Location searched when the caller gives none
pub const DEFAULT_LOCATION: &str = "Marseille, France";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single rental offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub company: String,
    /// Category and model, e.g. "Economy - Fiat Panda"
    pub car_type: String,
    pub price: f64,
    pub currency: String,
    /// Pickup location
    pub location: String,
    /// 0.0 to 5.0
    pub rating: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Deal {
    pub fn new(
        company: &str,
        car_type: &str,
        price: f64,
        currency: &str,
        location: &str,
        rating: f64,
        features: &[&str],
    ) -> Self {
        Self {
            company: company.to_string(),
            car_type: car_type.to_string(),
            price,
            currency: currency.to_string(),
            location: location.to_string(),
            rating,
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Location and dates attached to a search.
///
/// Sources receive the context but the static ones never consult it, so
/// changing these fields does not change which deals come back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchContext {
    pub location: String,
    pub pickup_date: String,
    pub return_date: String,
}

impl SearchContext {
    /// Context for `location`, picking up tomorrow and returning after the rental period
    pub fn new(location: &str) -> Self {
        Self::starting_from(location, Local::now().date_naive())
    }

    /// Context relative to an explicit `today`
    pub fn starting_from(location: &str, today: NaiveDate) -> Self {
        let pickup = today + Duration::days(1);
        let dropoff = pickup + Duration::days(RENTAL_DAYS);
        Self {
            location: location.to_string(),
            pickup_date: pickup.format(DATE_FORMAT).to_string(),
            return_date: dropoff.format(DATE_FORMAT).to_string(),
        }
    }

    /// Override fields the request actually carries. Missing or empty values keep the default.
    pub fn apply(&mut self, request: &SearchRequest) {
        if let Some(location) = non_empty(&request.location) {
            self.location = location.to_string();
        }
        if let Some(pickup) = non_empty(&request.pickup_date) {
            self.pickup_date = pickup.to_string();
        }
        if let Some(dropoff) = non_empty(&request.return_date) {
            self.return_date = dropoff.to_string();
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Body of `POST /search`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResponse {
    pub success: bool,
    pub cheapest_deal: Option<Deal>,
    pub top_deals: Vec<Deal>,
    pub total_deals: usize,
    pub search_params: SearchContext,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
