//! Domain values exposed by the quote search service layer.

pub mod quote;
