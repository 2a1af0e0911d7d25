//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let shift = factory::shift::create_shift(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (account, category, counterparty, transaction) =
//!         factory::helpers::create_transaction_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//! use entity::sea_orm_active_enums::UserRole;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .email("processor@example.com")
//!     .role(UserRole::Processor)
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let tier = factory::create_daily_tier(&db, 0, Some(50_000), 100).await?;
//! let deposit = factory::create_deposit(&db, user.id, 25_000).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shift` - Create work shift entities
//! - `deposit` - Create deposit entities
//! - `bonus_tier` - Create bonus tier entities
//! - `doc_section` - Create documentation section entities
//! - `doc_page` - Create documentation page entities
//! - `finance_account` - Create finance account entities
//! - `finance_category` - Create finance category entities
//! - `counterparty` - Create counterparty entities
//! - `finance_transaction` - Create finance transaction entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod bonus_tier;
pub mod counterparty;
pub mod deposit;
pub mod doc_page;
pub mod doc_section;
pub mod finance_account;
pub mod finance_category;
pub mod finance_transaction;
pub mod helpers;
pub mod shift;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use bonus_tier::{create_daily_tier, create_monthly_tier};
pub use counterparty::create_counterparty;
pub use deposit::create_deposit;
pub use doc_page::create_page;
pub use doc_section::create_section;
pub use finance_account::create_account;
pub use finance_category::create_category;
pub use finance_transaction::create_transaction;
pub use shift::create_shift;
pub use user::{create_user, create_user_with_role};
