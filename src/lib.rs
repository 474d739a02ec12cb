//! List-view utilities for the work-report application.
//!
//! Two cooperating pieces: [`pagination`] turns a row count and a requested
//! page into query offsets plus the page-control model, and [`keywords`]
//! canonicalizes free-text search terms into the comma-separated filter
//! string stored on clients and missions. [`query`] holds the boundary
//! types handlers use to feed both.

pub mod keywords;
pub mod pagination;
pub mod query;
