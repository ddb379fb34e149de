//! Product module: repository abstraction plus the ownership-gated service on top of it.

pub mod repository;
pub mod service;

pub use repository::ProductRepository;
pub use service::ProductService;
