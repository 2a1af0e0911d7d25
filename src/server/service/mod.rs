//! Business logic layer between controllers and repositories.

pub mod auth;
pub mod bonus;
pub mod deposit;
pub mod docs;
pub mod finance;
pub mod media;
pub mod shift;
pub mod user;

#[cfg(test)]
mod test;
