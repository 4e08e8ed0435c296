use crate::domain::quote::Quote;
use crate::dto::quotes::SearchQuotesParams;
use crate::repository::{QuoteReader, QuoteSearchQuery};
use crate::services::ServiceResult;

/// Returns every quote whose title contains the requested text, ignoring case.
///
/// A missing `query` searches for the empty string and therefore matches all
/// quotes. Rows storage could not map are dropped from the result and only
/// reported in the log.
pub fn search_quotes<R>(repo: &R, params: SearchQuotesParams) -> ServiceResult<Vec<Quote>>
where
    R: QuoteReader + ?Sized,
{
    let query = QuoteSearchQuery::new(params.query.unwrap_or_default());

    let search = repo.search_quotes(&query).map_err(|err| {
        log::error!("Failed to search quotes: {err}");
        err
    })?;

    if search.skipped > 0 {
        log::warn!(
            "Skipped {} quote rows that could not be mapped for query {:?}",
            search.skipped,
            query.text
        );
    }

    Ok(search.quotes)
}
