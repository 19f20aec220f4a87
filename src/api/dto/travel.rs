//! Wire representation of travel records.
//!
//! Outbound records are rendered as
//!
//! ```json
//! { "id": 1, "url": "http://localhost:3000/travels/1/", "destination": "Lisbon", "details": "Tram 28" }
//! ```
//!
//! Inbound payloads may carry `id` or `url`; both are ignored, as is any
//! unknown field.

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::domain::entities::{NewTravel, Travel, TravelPatch};
use crate::error::AppError;

/// Request body for create, replace and partial update.
///
/// Each field distinguishes three states:
///
/// - **Absent** → `None`
/// - **`null`** → `Some(None)`
/// - **Value** → `Some(Some(value))`
#[derive(Debug, Default, Deserialize)]
pub struct TravelPayload {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub destination: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub details: Option<Option<String>>,
}

impl TravelPayload {
    /// Converts a full payload (create, replace) into entity fields.
    ///
    /// Both fields must be present and non-null. Values are trimmed; blank and
    /// length rules are checked by the service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every missing or null field.
    pub fn into_new_travel(self) -> Result<NewTravel, AppError> {
        let mut errors = ValidationErrors::new();

        let destination = required(self.destination, "destination", &mut errors);
        let details = required(self.details, "details", &mut errors);

        match (destination, details) {
            (Some(destination), Some(details)) => Ok(NewTravel::new(destination, details)),
            _ => Err(errors.into()),
        }
    }

    /// Converts a partial payload into a patch. Absent fields stay unset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is explicitly `null`.
    pub fn into_patch(self) -> Result<TravelPatch, AppError> {
        let mut errors = ValidationErrors::new();

        let destination = optional(self.destination, "destination", &mut errors);
        let details = optional(self.details, "details", &mut errors);

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(TravelPatch {
            destination,
            details,
        })
    }
}

fn required(
    value: Option<Option<String>>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, field_error("required", "This field is required."));
            None
        }
        Some(value) => optional(Some(value), field, errors),
    }
}

fn optional(
    value: Option<Option<String>>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None => None,
        Some(None) => {
            errors.add(field, field_error("null", "This field may not be null."));
            None
        }
        Some(Some(text)) => Some(text.trim().to_string()),
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// JSON representation of a stored travel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelResponse {
    pub id: i64,
    /// Absolute link to this record's detail endpoint.
    pub url: String,
    pub destination: String,
    pub details: String,
}

impl TravelResponse {
    pub fn from_travel(travel: Travel, base_url: &str) -> Self {
        Self {
            url: travel_url(base_url, travel.id),
            id: travel.id,
            destination: travel.destination,
            details: travel.details,
        }
    }
}

/// Builds the collection URL, e.g. `http://localhost:3000/travels/`.
pub fn travels_url(base_url: &str) -> String {
    format!("{}/travels/", base_url.trim_end_matches('/'))
}

/// Builds the detail URL for one record.
pub fn travel_url(base_url: &str, id: i64) -> String {
    format!("{}{}/", travels_url(base_url), id)
}
