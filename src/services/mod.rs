//! Services for deal aggregation, rendering, logging and configuration

pub mod aggregator;
pub mod config;
pub mod formatter;
pub mod logger;

pub use aggregator::{DealAggregator, DEFAULT_TOP_LIMIT};
pub use config::Config;
pub use formatter::{format_deal_info, render_report};
pub use logger::{LogLevel, Logger, MemoryLogger, StderrLogger};
