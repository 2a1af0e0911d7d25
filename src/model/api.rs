use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Query parameters shared by paginated list endpoints.
#[derive(Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Zero-indexed page number.
    pub page: Option<u64>,
    /// Number of entries per page.
    pub entries: Option<u64>,
}

impl PaginationParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub fn entries(&self) -> u64 {
        self.entries.unwrap_or(10).clamp(1, 100)
    }
}
