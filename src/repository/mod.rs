use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::quote::QuoteSearch,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod quote;

/// Diesel-backed repository sharing one connection pool across requests.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Free-text search over quote titles.
///
/// The text is kept exactly as received: it is not trimmed, case-folded, or
/// escaped, so `%` and `_` keep their `ILIKE` meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSearchQuery {
    pub text: String,
}

impl QuoteSearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// `ILIKE` pattern matching titles that contain the text anywhere.
    pub fn pattern(&self) -> String {
        format!("%{}%", self.text)
    }
}

pub trait QuoteReader {
    fn search_quotes(&self, query: &QuoteSearchQuery) -> RepositoryResult<QuoteSearch>;
}
