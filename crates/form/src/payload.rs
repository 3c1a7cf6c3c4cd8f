//! Data handed to the send operation

use serde::{Deserialize, Serialize};

/// The four submitted values.
///
/// Serialised in camelCase to match the email template variables
/// (`firstName`, `lastName`, `phone`, `email`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_template_variable_names() {
        let payload = ContactPayload {
            first_name: "Al".into(),
            last_name: "Li".into(),
            phone: "1234567890".into(),
            email: "al@gmail.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "firstName": "Al",
                "lastName": "Li",
                "phone": "1234567890",
                "email": "al@gmail.com",
            })
        );
    }
}
