//! JSON search endpoint over stored quotes.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::quotes::{QuoteDto, SearchQuotesParams};
use crate::repository::QuoteReader;
use crate::services::{ServiceError, ServiceResult, quotes as quotes_service};

/// `GET /search/quotes?query=<text>`
///
/// The query string is parsed leniently: when `query` is repeated the first
/// value wins, and a missing `query` or an unparsable query string falls back
/// to the empty search instead of rejecting the request.
pub async fn search_quotes<R>(req: HttpRequest, repo: web::Data<R>) -> HttpResponse
where
    R: QuoteReader + Send + Sync + 'static,
{
    let params = SearchQuotesParams {
        query: web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find(|(key, _)| key == "query")
                    .map(|(_, value)| value)
            }),
    };

    // Diesel blocks, so keep it off the async worker serving other requests.
    let result: ServiceResult<Vec<_>> =
        web::block(move || quotes_service::search_quotes(repo.get_ref(), params))
            .await
            .map_err(|err| ServiceError::Internal(err.to_string()))
            .and_then(|result| result);

    match result {
        Ok(quotes) => {
            let body: Vec<QuoteDto> = quotes.into_iter().map(QuoteDto::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(ServiceError::Repository(err)) => HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body(format!("Erreur SQL: {err}")),
        Err(err) => {
            log::error!("Failed to run quote search: {err}");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("Erreur interne: {err}"))
        }
    }
}
