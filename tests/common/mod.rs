#![allow(dead_code)]

use std::env;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, TestCustomizer};
use diesel::sql_types::{Nullable, Text};

use quote_search::db::{DbPool, get_connection};
use quote_search::domain::quote::{Quote, QuoteSearch};
use quote_search::repository::errors::{RepositoryError, RepositoryResult};
use quote_search::repository::{QuoteReader, QuoteSearchQuery};

/// Isolated PostgreSQL fixture.
///
/// The pool holds a single connection inside a transaction that is never
/// committed, and `quote` is a temporary table on that connection, so tests
/// can run in parallel against the same database.
pub struct TestDb {
    pool: DbPool,
}

impl TestDb {
    /// Connects to the database named by `TEST_DATABASE_URL`.
    pub fn new() -> Self {
        let url = env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let pool = Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(TestCustomizer))
            .build(ConnectionManager::<PgConnection>::new(url))
            .expect("test database should be reachable");

        let mut conn = get_connection(&pool).expect("connection");
        conn.batch_execute(
            "CREATE TEMPORARY TABLE quote (
                id SERIAL PRIMARY KEY,
                title TEXT,
                number TEXT,
                issued_at DATE NOT NULL
            );",
        )
        .expect("create quote table");

        Self { pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn insert(&self, title: Option<&str>, number: Option<&str>, issued_at: &str) -> i32 {
        #[derive(QueryableByName)]
        struct Inserted {
            #[diesel(sql_type = diesel::sql_types::Integer)]
            id: i32,
        }

        let mut conn = get_connection(&self.pool).expect("connection");
        diesel::sql_query(
            "INSERT INTO quote (title, number, issued_at) VALUES ($1, $2, $3::date) RETURNING id",
        )
        .bind::<Nullable<Text>, _>(title)
        .bind::<Nullable<Text>, _>(number)
        .bind::<Text, _>(issued_at)
        .get_result::<Inserted>(&mut conn)
        .expect("insert quote")
        .id
    }

    pub fn count(&self) -> i64 {
        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            count: i64,
        }

        let mut conn = get_connection(&self.pool).expect("connection");
        diesel::sql_query("SELECT COUNT(*) AS count FROM quote")
            .get_result::<Count>(&mut conn)
            .expect("count quotes")
            .count
    }
}

/// Test double matching titles with a lowercase substring check.
pub struct InMemoryQuotes {
    quotes: Vec<Quote>,
    failure: Option<String>,
}

impl InMemoryQuotes {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            failure: None,
        }
    }

    /// Repository whose every search fails as if the database were gone.
    pub fn failing(message: &str) -> Self {
        Self {
            quotes: Vec::new(),
            failure: Some(message.to_string()),
        }
    }
}

impl QuoteReader for InMemoryQuotes {
    fn search_quotes(&self, query: &QuoteSearchQuery) -> RepositoryResult<QuoteSearch> {
        if let Some(message) = &self.failure {
            return Err(RepositoryError::ConnectionError(message.clone()));
        }

        let needle = query.text.to_lowercase();
        let quotes = self
            .quotes
            .iter()
            .filter(|quote| quote.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(QuoteSearch::new(quotes, 0))
    }
}

pub fn sample_quotes() -> Vec<Quote> {
    vec![
        Quote {
            id: 1,
            title: "Annual Report".to_string(),
            number: "Q1-001".to_string(),
            issued_at: "2024-01-10".to_string(),
        },
        Quote {
            id: 2,
            title: "Budget Summary".to_string(),
            number: "Q1-002".to_string(),
            issued_at: "2024-02-01".to_string(),
        },
    ]
}
