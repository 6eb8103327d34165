//! `car-deals check` subcommand: one search printed to the terminal

use std::sync::Arc;

use clap::Args;

use crate::services::{render_report, Config, DealAggregator, Logger};
use crate::types::{Result, SearchContext, SearchRequest, SearchResponse};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Pickup location
    #[arg(long)]
    pub location: Option<String>,

    /// Pickup date (YYYY-MM-DD, default tomorrow)
    #[arg(long)]
    pub pickup_date: Option<String>,

    /// Return date (YYYY-MM-DD, default two days after pickup)
    #[arg(long)]
    pub return_date: Option<String>,

    /// Number of deals to list (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl CheckArgs {
    /// Run the search and return the text to print
    pub fn execute(&self, config: &Config, logger: Arc<dyn Logger>) -> Result<String> {
        let mut context = SearchContext::new(&config.default_location);
        context.apply(&SearchRequest {
            location: self.location.clone(),
            pickup_date: self.pickup_date.clone(),
            return_date: self.return_date.clone(),
        });
        let limit = self.limit.unwrap_or(config.top_limit);

        logger.info("Starting car rental deal check");
        let aggregator = DealAggregator::new(context, logger.clone());
        let cheapest = aggregator.find_cheapest_deal();
        let top_deals = if cheapest.is_some() {
            aggregator.get_top_deals(limit)
        } else {
            Vec::new()
        };

        let output = if self.json {
            let response = SearchResponse {
                success: true,
                cheapest_deal: cheapest,
                total_deals: aggregator.get_all_deals().len(),
                top_deals,
                search_params: aggregator.context().clone(),
            };
            serde_json::to_string_pretty(&response)?
        } else {
            render_report(aggregator.context(), cheapest.as_ref(), &top_deals, limit)
        };

        logger.info("Car rental check completed");
        Ok(output)
    }
}
