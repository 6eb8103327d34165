//! Cheapest car rental deal finder
//!
//! Combines simulated rental offers from static sources, ranks them by
//! price and serves the results over HTTP or prints them to the terminal.

pub mod cli;
pub mod server;
pub mod services;
pub mod sources;
pub mod types;
