//! Data transfer objects for the HTTP JSON API.
//!
//! These types define the request and response shapes of every `/api` route.
//! They carry serde derives for JSON and utoipa schemas for the generated
//! OpenAPI document. Domain models in `server::model` convert to and from
//! these DTOs at the controller boundary.

pub mod api;
pub mod auth;
pub mod bonus;
pub mod deposit;
pub mod docs;
pub mod finance;
pub mod media;
pub mod shift;
pub mod user;
