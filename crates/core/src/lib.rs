//! Domain layer for the apartment listings service.
//!
//! Pure logic only: identifier parsing, form coercion, field validation and
//! list-filter parsing. Persistence lives in `estate-db`, media uploads in
//! `estate-media`, HTTP in `estate-api`.

pub mod apartment;
pub mod error;
pub mod filter;
pub mod types;
