//! Catalog data model shared by the service layer and its repositories.

pub mod errors;
pub mod product;
