//! Jewelry catalog (in-memory).
//!
//! This crate owns the authoritative set of catalog items and enforces their
//! invariants: every field valid, every id unique. No IO, no storage.

pub mod item;
pub mod repository;
pub mod seed;

pub use item::CatalogItem;
pub use repository::CatalogRepository;
