//! HTTP routes of the quote search service.

use actix_web::web;

use crate::repository::QuoteReader;

pub mod search;

/// Registers every route against the repository type `R` held in app data.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: QuoteReader + Send + Sync + 'static,
{
    cfg.route("/search/quotes", web::get().to(search::search_quotes::<R>));
}
