//! Sleeper read API: the upstream contract, its HTTP implementation and payload types.

pub mod client;
pub mod http;
pub mod types;

pub use client::{TrendingQuery, UpstreamClient};
pub use http::SleeperClient;
