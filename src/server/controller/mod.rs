//! HTTP request handlers, one module per API surface.

pub mod auth;
pub mod bonus;
pub mod deposit;
pub mod docs;
pub mod finance;
pub mod media;
pub mod shift;
pub mod user;
