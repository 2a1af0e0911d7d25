//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary,
//! and controllers convert them into DTOs for responses. Parameter structs name
//! the inputs of each service operation.

pub mod bonus;
pub mod deposit;
pub mod docs;
pub mod finance;
pub mod shift;
pub mod user;
