//! Smoke probe for the Firecrawl brand-extraction endpoint: one credentialed
//! scrape call, a console summary of the brand fields, and a raw-body
//! snapshot on success.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod probe;
pub mod report;
