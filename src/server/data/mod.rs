//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table of the roadmap schema. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic.

pub mod income_stream;
pub mod progress;
pub mod skill;
pub mod user;

#[cfg(test)]
mod test;
