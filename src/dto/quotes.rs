//! DTOs exposed by the quote search endpoint.

use serde::Serialize;

use crate::domain::quote::Quote;

/// Query parameters accepted by `/search/quotes`.
#[derive(Debug, Default)]
pub struct SearchQuotesParams {
    /// Free text looked up in quote titles. Absent means empty.
    pub query: Option<String>,
}

/// JSON shape of a single search hit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub id: i32,
    pub title: String,
    pub number: String,
    pub issued_at: String,
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            title: quote.title,
            number: quote.number,
            issued_at: quote.issued_at,
        }
    }
}
