//! Form DTOs

use serde::Deserialize;

/// POST /clients/new
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewClientForm {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}
