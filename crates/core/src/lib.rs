//! `goldline-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation):
//! field predicates, the error taxonomy, the entity trait and session ids.

pub mod entity;
pub mod error;
pub mod id;
pub mod validate;

pub use entity::Entity;
pub use error::{
    CredentialError, DomainError, DomainResult, FieldViolation, NotFoundError, ValidationError,
    ViolationKind, Violations,
};
pub use id::SessionId;
