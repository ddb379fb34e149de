//! Service layer for the product catalog.
//! - Ownership-gated CRUD over a `ProductRepository`.
//! - Repository errors pass through untouched; the service only adds 403/404 outcomes.

pub mod errors;
pub mod pagination;
pub mod product;
