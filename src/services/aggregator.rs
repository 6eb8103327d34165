//! Aggregator service for combining and ranking deals

use std::sync::Arc;

use crate::services::logger::Logger;
use crate::sources::{list_primary_source, list_secondary_source, SourceRegistry};
use crate::types::{Deal, SearchContext};

/// Number of deals returned by a top-deals query when the caller gives no limit
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Combines deals from every registered source and ranks them by price.
///
/// Built once per search. Deals are re-fetched on every query; nothing is
/// cached between calls.
pub struct DealAggregator {
    context: SearchContext,
    registry: SourceRegistry,
    logger: Arc<dyn Logger>,
}

impl DealAggregator {
    /// Aggregator over the default sources
    pub fn new(context: SearchContext, logger: Arc<dyn Logger>) -> Self {
        Self::with_registry(context, SourceRegistry::new(), logger)
    }

    pub fn with_registry(
        context: SearchContext,
        registry: SourceRegistry,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            context,
            registry,
            logger,
        }
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SearchContext {
        &mut self.context
    }

    pub fn list_primary_source(&self) -> Vec<Deal> {
        list_primary_source()
    }

    pub fn list_secondary_source(&self) -> Vec<Deal> {
        list_secondary_source()
    }

    /// All deals, sources concatenated in registry order.
    ///
    /// A failing source is logged and ends the search; deals gathered from
    /// earlier sources are still returned.
    pub fn get_all_deals(&self) -> Vec<Deal> {
        self.logger.info(&format!(
            "Searching for car rentals in {}",
            self.context.location
        ));
        self.logger.info(&format!(
            "Pickup: {}, Return: {}",
            self.context.pickup_date, self.context.return_date
        ));

        let mut all_deals = Vec::new();

        for (i, source) in self.registry.sources().iter().enumerate() {
            if i > 0 {
                self.logger.info("Searching additional car rental sources...");
            }
            match source.fetch(&self.context) {
                Ok(deals) => all_deals.extend(deals),
                Err(e) => {
                    self.logger.error(&format!(
                        "Error fetching deals from {}: {}",
                        source.name(),
                        e
                    ));
                    return all_deals;
                }
            }
        }

        self.logger
            .info(&format!("Found {} total deals", all_deals.len()));
        all_deals
    }

    /// Lowest-priced deal; the earliest one wins a tie
    pub fn find_cheapest_deal(&self) -> Option<Deal> {
        let deals = self.get_all_deals();

        // min_by keeps the first of equal elements
        let cheapest = deals
            .into_iter()
            .min_by(|a, b| a.price.total_cmp(&b.price));

        if cheapest.is_none() {
            self.logger.warn("No deals found");
        }
        cheapest
    }

    /// The `limit` cheapest deals, ascending by price, ties in listing order
    pub fn get_top_deals(&self, limit: usize) -> Vec<Deal> {
        rank_by_price(self.get_all_deals(), limit)
    }
}

/// Stable ascending sort by price, truncated to `limit`
pub fn rank_by_price(mut deals: Vec<Deal>, limit: usize) -> Vec<Deal> {
    deals.sort_by(|a, b| a.price.total_cmp(&b.price));
    deals.truncate(limit);
    deals
}
