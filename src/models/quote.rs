//! Diesel model for rows of the `quote` table.

use diesel::prelude::*;

use crate::domain::quote::Quote as DomainQuote;

#[derive(Debug, Clone, Queryable)]
/// Diesel model for [`crate::domain::quote::Quote`].
///
/// Fields are read positionally as `(id, title, number, issued_at)`; the
/// repository selects `issued_at` cast to text so date columns decode here.
pub struct Quote {
    pub id: i32,
    pub title: String,
    pub number: String,
    pub issued_at: String,
}

impl From<Quote> for DomainQuote {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            title: quote.title,
            number: quote.number,
            issued_at: quote.issued_at,
        }
    }
}
