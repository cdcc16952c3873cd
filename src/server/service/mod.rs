//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Registration rules and the ownership check on every write
//! - **Orchestration**: Coordinating the user lookup with the per-resource repository call
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod income_stream;
pub mod progress;
pub mod skill;
pub mod user;
