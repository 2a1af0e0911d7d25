pub use super::bonus_tier::Entity as BonusTier;
pub use super::counterparty::Entity as Counterparty;
pub use super::deposit::Entity as Deposit;
pub use super::doc_page::Entity as DocPage;
pub use super::doc_section::Entity as DocSection;
pub use super::finance_account::Entity as FinanceAccount;
pub use super::finance_category::Entity as FinanceCategory;
pub use super::finance_transaction::Entity as FinanceTransaction;
pub use super::shift::Entity as Shift;
pub use super::user::Entity as User;
