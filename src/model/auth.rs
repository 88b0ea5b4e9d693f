use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Default, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    #[serde(rename = "staffID")]
    pub staff_id: i32,
    pub username: String,
    pub role: String,
}
