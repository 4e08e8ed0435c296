//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::quote::QuoteSearch;
use crate::repository::errors::RepositoryResult;
use crate::repository::{QuoteReader, QuoteSearchQuery};

mock! {
    pub Repository {}

    impl QuoteReader for Repository {
        fn search_quotes(&self, query: &QuoteSearchQuery) -> RepositoryResult<QuoteSearch>;
    }
}
