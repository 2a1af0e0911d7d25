mod bonus_tier;
mod counterparty;
mod deposit;
mod doc_page;
mod doc_section;
mod finance_account;
mod finance_category;
mod finance_transaction;
mod shift;
mod user;
