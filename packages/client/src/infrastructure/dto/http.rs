//! Waitlist HTTP API DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::WaitlistForm;

/// `POST /api/waitlist` request body
///
/// Key names and order match the browser form exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequestDto {
    pub full_name: String,
    pub email: String,
    pub profession: String,
    pub location: String,
    pub interests: Vec<String>,
}

impl From<&WaitlistForm> for WaitlistRequestDto {
    fn from(form: &WaitlistForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            profession: form.profession.clone(),
            location: form.location.clone(),
            interests: form
                .interests
                .iter()
                .map(|interest| interest.as_str().to_string())
                .collect(),
        }
    }
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WaitlistErrorDto {
    #[serde(default)]
    pub message: Option<String>,
}
