//! Repository implementation for quote lookups.

use diesel::connection::DefaultLoadingMode;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::{
    domain::quote::{Quote, QuoteSearch},
    models::quote::Quote as DbQuote,
    repository::{DieselRepository, QuoteReader, QuoteSearchQuery, errors::RepositoryResult},
};

impl QuoteReader for DieselRepository {
    /// Rows that fail to decode (for example a `NULL` in `number`) are skipped
    /// and counted in [`QuoteSearch::skipped`]; only failures of the query
    /// itself are returned as errors.
    fn search_quotes(&self, query: &QuoteSearchQuery) -> RepositoryResult<QuoteSearch> {
        use crate::schema::quote;

        let mut conn = self.conn()?;

        let rows = quote::table
            .filter(quote::title.ilike(query.pattern()))
            .select((
                quote::id,
                quote::title,
                quote::number,
                sql::<Text>("issued_at::text"),
            ))
            .load_iter::<DbQuote, DefaultLoadingMode>(&mut conn)?;

        let mut quotes = Vec::new();
        let mut skipped = 0;
        for row in rows {
            match row {
                Ok(row) => quotes.push(Quote::from(row)),
                Err(e) => {
                    log::debug!("Skipping quote row that failed to map: {e}");
                    skipped += 1;
                }
            }
        }

        Ok(QuoteSearch::new(quotes, skipped))
    }
}
