//! Database and configuration models used by the quote search service.

pub mod config;
pub mod quote;
