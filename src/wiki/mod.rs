//! Wiki.js GraphQL access
//!
//! - **client**: the gateway; one POST per call, bearer auth, error classification
//! - **queries**: the query catalog and typed variable sets
//! - **models**: page shapes returned by the API
//! - **pages**: page operations (search with fallback, read-merge-write update, ...)
//! - **error**: the error taxonomy shared by every layer above

pub mod client;
pub mod error;
pub mod models;
pub mod pages;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod client_test;

pub use client::WikiClient;
pub use error::{GraphQlError, WikiError, WikiResult};
pub use models::{
    MovedPage, Page, PageMutation, PageRef, PageSummary, PageTag, ResponseResult, SearchResult,
    TreeItem,
};
pub use pages::{PageChanges, SearchOutcome, SearchStrategy, TreeRequest};
pub use queries::{CreatePageVars, TreeMode};
