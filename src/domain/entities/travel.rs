//! Travel entity, the only record type persisted by the service.

use validator::{Validate, ValidationError};

/// Maximum length of the `destination` and `details` columns, in characters.
pub const MAX_FIELD_LENGTH: usize = 100;

/// A persisted travel record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Travel {
    pub id: i64,
    pub destination: String,
    pub details: String,
}

impl Travel {
    /// Creates a new Travel instance.
    pub fn new(id: i64, destination: String, details: String) -> Self {
        Self {
            id,
            destination,
            details,
        }
    }

    /// Applies a partial update, keeping the current value of every unset field.
    ///
    /// The result is not validated here; callers run [`Validate::validate`] on it.
    pub fn merge(&self, patch: TravelPatch) -> NewTravel {
        NewTravel {
            destination: patch
                .destination
                .unwrap_or_else(|| self.destination.clone()),
            details: patch.details.unwrap_or_else(|| self.details.clone()),
        }
    }
}

/// Field values for inserting or fully replacing a travel record.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewTravel {
    #[validate(
        custom(function = "not_blank", message = "This field may not be blank."),
        custom(function = "no_null_characters", message = "Null characters are not allowed."),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub destination: String,

    #[validate(
        custom(function = "not_blank", message = "This field may not be blank."),
        custom(function = "no_null_characters", message = "Null characters are not allowed."),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub details: String,
}

impl NewTravel {
    pub fn new(destination: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            details: details.into(),
        }
    }
}

/// Partial update for an existing travel record.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelPatch {
    pub destination: Option<String>,
    pub details: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// PostgreSQL text columns cannot store `\0`.
fn no_null_characters(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("null_characters_not_allowed"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_creation() {
        let travel = Travel::new(1, "Lisbon".to_string(), "Tram 28".to_string());

        assert_eq!(travel.id, 1);
        assert_eq!(travel.destination, "Lisbon");
        assert_eq!(travel.details, "Tram 28");
    }

    #[test]
    fn test_new_travel_valid() {
        let new_travel = NewTravel::new("Kyoto", "Temples in autumn");
        assert!(new_travel.validate().is_ok());
    }

    #[test]
    fn test_new_travel_at_max_length() {
        let new_travel = NewTravel::new("a".repeat(MAX_FIELD_LENGTH), "b".repeat(MAX_FIELD_LENGTH));
        assert!(new_travel.validate().is_ok());
    }

    #[test]
    fn test_new_travel_too_long() {
        let new_travel = NewTravel::new("a".repeat(MAX_FIELD_LENGTH + 1), "ok");

        let errors = new_travel.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("destination"));
        assert!(!fields.contains_key("details"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 100 two-byte characters
        let new_travel = NewTravel::new("é".repeat(MAX_FIELD_LENGTH), "ok");
        assert!(new_travel.validate().is_ok());
    }

    #[test]
    fn test_new_travel_blank() {
        let new_travel = NewTravel::new("Oslo", "   ");

        let errors = new_travel.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["details"][0].code, "blank");
    }

    #[test]
    fn test_new_travel_null_character() {
        let new_travel = NewTravel::new("Pa\0ris", "ok");

        let errors = new_travel.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["destination"][0].code, "null_characters_not_allowed");
        assert_eq!(
            fields["destination"][0].message.as_deref(),
            Some("Null characters are not allowed.")
        );
        assert!(!fields.contains_key("details"));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let travel = Travel::new(3, "Rome".to_string(), "Colosseum".to_string());
        let merged = travel.merge(TravelPatch {
            destination: None,
            details: Some("Pantheon".to_string()),
        });

        assert_eq!(merged, NewTravel::new("Rome", "Pantheon"));
    }

    #[test]
    fn test_merge_empty_patch() {
        let travel = Travel::new(3, "Rome".to_string(), "Colosseum".to_string());
        let merged = travel.merge(TravelPatch::default());

        assert_eq!(merged.destination, "Rome");
        assert_eq!(merged.details, "Colosseum");
    }
}
