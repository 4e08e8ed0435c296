use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Quote {
    pub id: i32,
    pub title: String,
    /// Reference code such as `Q1-001`.
    pub number: String,
    /// Issue date as rendered by the database.
    pub issued_at: String,
}

/// Rows matched by a quote search, in the order storage returned them.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuoteSearch {
    pub quotes: Vec<Quote>,
    /// Number of matching rows that could not be mapped into a [`Quote`] and
    /// were left out of `quotes`.
    pub skipped: usize,
}

impl QuoteSearch {
    #[must_use]
    pub fn new(quotes: Vec<Quote>, skipped: usize) -> Self {
        Self { quotes, skipped }
    }
}
