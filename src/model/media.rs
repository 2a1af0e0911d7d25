use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MediaUploadDto {
    /// Name the file was stored under.
    pub file_name: String,
    /// Public path the file is served from.
    pub url: String,
    pub size_bytes: u64,
}
