// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller input for new bookings and contact messages, and its validation.
//!
//! Every field is optional at the type level so that a missing field shows
//! up as a named validation failure rather than a deserialization error.
//! Field names in errors are the camelCase names clients send.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use courier_core::{BookingStatus, ContactStatus, CourierError, PackageType};

/// Smallest accepted package weight.
pub const MIN_WEIGHT: f64 = 0.1;

/// Request to create a booking.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_address: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub receiver_address: Option<String>,
    pub package_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub package_weight: Option<f64>,
    pub package_description: Option<String>,
    pub distance: Option<String>,
}

/// A booking request that passed validation. Text fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub package_type: PackageType,
    pub package_weight: f64,
    pub package_description: Option<String>,
    pub distance: Option<String>,
}

impl NewBooking {
    /// Check every field and collect all failures into one error.
    pub fn validate(&self) -> Result<ValidBooking, CourierError> {
        let mut bad = Vec::new();
        let mut text = |value: &Option<String>, field: &str| -> String {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => {
                    bad.push(field.to_string());
                    String::new()
                }
            }
        };

        let sender_name = text(&self.sender_name, "senderName");
        let sender_phone = text(&self.sender_phone, "senderPhone");
        let sender_address = text(&self.sender_address, "senderAddress");
        let receiver_name = text(&self.receiver_name, "receiverName");
        let receiver_phone = text(&self.receiver_phone, "receiverPhone");
        let receiver_address = text(&self.receiver_address, "receiverAddress");

        let package_type = self
            .package_type
            .as_deref()
            .and_then(|t| PackageType::from_str(t.trim()).ok());
        if package_type.is_none() {
            bad.push("packageType".to_string());
        }

        let package_weight = self
            .package_weight
            .filter(|w| w.is_finite() && *w >= MIN_WEIGHT);
        if package_weight.is_none() {
            bad.push("packageWeight".to_string());
        }

        match (package_type, package_weight) {
            (Some(package_type), Some(package_weight)) if bad.is_empty() => Ok(ValidBooking {
                sender_name,
                sender_phone,
                sender_address,
                receiver_name,
                receiver_phone,
                receiver_address,
                package_type,
                package_weight,
                package_description: non_blank(&self.package_description),
                distance: non_blank(&self.distance),
            }),
            _ => Err(CourierError::validation(bad)),
        }
    }
}

/// Request to submit a contact message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl NewContact {
    pub fn validate(&self) -> Result<ValidContact, CourierError> {
        let mut bad = Vec::new();
        let name = non_blank(&self.name);
        if name.is_none() {
            bad.push("name".to_string());
        }
        let email = non_blank(&self.email).filter(|e| e.contains('@'));
        if email.is_none() {
            bad.push("email".to_string());
        }
        let message = non_blank(&self.message);
        if message.is_none() {
            bad.push("message".to_string());
        }

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(ValidContact {
                name,
                email,
                phone: non_blank(&self.phone),
                message,
            }),
            _ => Err(CourierError::validation(bad)),
        }
    }
}

/// Parse a booking status name such as `in-transit`.
pub fn parse_booking_status(value: &str) -> Result<BookingStatus, CourierError> {
    BookingStatus::from_str(value.trim())
        .map_err(|_| CourierError::validation(vec!["status".to_string()]))
}

/// Parse a contact status name (`new`, `read`, `replied`).
pub fn parse_contact_status(value: &str) -> Result<ContactStatus, CourierError> {
    ContactStatus::from_str(value.trim())
        .map_err(|_| CourierError::validation(vec!["status".to_string()]))
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accept a number sent either as a JSON number or as a numeric string.
///
/// Unparseable strings become NaN so validation reports the field. Use with
/// `#[serde(default, deserialize_with = "lenient_number")]`.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(
        Option::<NumberOrText>::deserialize(deserializer)?.map(|value| match value {
            NumberOrText::Number(n) => n,
            NumberOrText::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewBooking {
        NewBooking {
            sender_name: Some("Asha".into()),
            sender_phone: Some("9000000001".into()),
            sender_address: Some("12 MG Road".into()),
            receiver_name: Some("Ravi".into()),
            receiver_phone: Some("9000000002".into()),
            receiver_address: Some("4 Park Street".into()),
            package_type: Some("document".into()),
            package_weight: Some(1.0),
            package_description: None,
            distance: None,
        }
    }

    fn fields(err: CourierError) -> Vec<String> {
        match err {
            CourierError::Validation { fields, .. } => fields,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn complete_booking_is_trimmed() {
        let mut input = complete();
        input.sender_name = Some("  Asha  ".into());
        input.distance = Some("  ".into());
        let valid = input.validate().unwrap();
        assert_eq!(valid.sender_name, "Asha");
        assert_eq!(valid.package_type, PackageType::Document);
        assert_eq!(valid.distance, None);
    }

    #[test]
    fn missing_fields_are_all_named() {
        let mut input = complete();
        input.sender_name = None;
        input.receiver_address = Some("   ".into());
        let bad = fields(input.validate().unwrap_err());
        assert_eq!(bad, vec!["senderName", "receiverAddress"]);
    }

    #[test]
    fn weight_threshold() {
        for weight in [0.0, 0.05, -1.0, f64::NAN, f64::INFINITY] {
            let mut input = complete();
            input.package_weight = Some(weight);
            assert_eq!(fields(input.validate().unwrap_err()), vec!["packageWeight"]);
        }
        let mut input = complete();
        input.package_weight = Some(0.1);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn unknown_package_type_rejected() {
        let mut input = complete();
        input.package_type = Some("crate".into());
        assert_eq!(fields(input.validate().unwrap_err()), vec!["packageType"]);
    }

    #[test]
    fn weight_accepts_numeric_strings() {
        let input: NewBooking =
            serde_json::from_str(r#"{"packageWeight": "2.5"}"#).unwrap();
        assert_eq!(input.package_weight, Some(2.5));

        let input: NewBooking =
            serde_json::from_str(r#"{"packageWeight": "heavy"}"#).unwrap();
        assert!(input.package_weight.unwrap().is_nan());

        let input: NewBooking = serde_json::from_str(r#"{"packageWeight": 3}"#).unwrap();
        assert_eq!(input.package_weight, Some(3.0));
    }

    #[test]
    fn contact_requires_email_with_at_sign() {
        let input = NewContact {
            name: Some("Meera".into()),
            email: Some("meera.example.com".into()),
            phone: None,
            message: Some("Where is my parcel?".into()),
        };
        assert_eq!(fields(input.validate().unwrap_err()), vec!["email"]);
    }

    #[test]
    fn contact_missing_everything() {
        let bad = fields(NewContact::default().validate().unwrap_err());
        assert_eq!(bad, vec!["name", "email", "message"]);
    }

    #[test]
    fn status_parsing() {
        assert_eq!(
            parse_booking_status("out-for-delivery").unwrap(),
            BookingStatus::OutForDelivery
        );
        assert!(parse_booking_status("lost").is_err());
        assert_eq!(parse_contact_status("replied").unwrap(), ContactStatus::Replied);
        assert!(parse_contact_status("archived").is_err());
    }
}
