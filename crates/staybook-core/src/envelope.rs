//! Response envelopes.
//!
//! Every backend response is wrapped as `{ success: bool, message?: string,
//! ...payload }`. Decoding is total: any JSON value produces an [`Envelope`],
//! and anything that does not look like a successful envelope is treated as
//! a logical failure rather than a parse error.

use serde_json::{Map, Value};

use crate::UserProfile;

/// Top-level response wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    success: bool,
    message: Option<String>,
    payload: Map<String, Value>,
}

impl Envelope {
    /// Decode an envelope from a response body.
    ///
    /// Non-object bodies and a missing or non-boolean `success` decode as a
    /// failed envelope. Empty messages are discarded.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut payload) = value else {
            return Self { success: false, message: None, payload: Map::new() };
        };

        let success = matches!(payload.remove("success"), Some(Value::Bool(true)));
        let message = match payload.remove("message") {
            Some(Value::String(message)) if !message.is_empty() => Some(message),
            _ => None,
        };

        Self { success, message, payload }
    }

    /// Server reported success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Server-supplied message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Remove and return a payload field.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.payload.remove(key)
    }

    /// Consume the envelope, keeping only its message.
    pub fn into_message(self) -> Option<String> {
        self.message
    }
}

/// Interpreted `GET /api/rooms` response.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomsResponse {
    /// Successful envelope carrying a listing. Entries are not yet validated.
    Listing(Vec<Value>),

    /// Envelope reported `success: false`.
    Rejected {
        /// Server-supplied message.
        message: Option<String>,
    },

    /// Envelope reported success but `rooms` is not an array.
    Malformed {
        /// Server-supplied message.
        message: Option<String>,
    },
}

impl RoomsResponse {
    /// Interpret a response body.
    pub fn from_value(value: Value) -> Self {
        let mut envelope = Envelope::from_value(value);
        if !envelope.is_success() {
            return Self::Rejected { message: envelope.into_message() };
        }

        match envelope.take("rooms") {
            Some(Value::Array(entries)) => Self::Listing(entries),
            _ => Self::Malformed { message: envelope.into_message() },
        }
    }
}

/// Interpreted `GET /api/user` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResponse {
    /// Successful envelope.
    Profile(UserProfile),

    /// Envelope reported `success: false`.
    Rejected {
        /// Server-supplied message.
        message: Option<String>,
    },
}

impl UserResponse {
    /// Interpret a response body.
    pub fn from_value(value: Value) -> Self {
        let mut envelope = Envelope::from_value(value);
        if !envelope.is_success() {
            return Self::Rejected { message: envelope.into_message() };
        }

        let role = envelope.take("role");
        let cities = envelope.take("recentSearchedCities");
        Self::Profile(UserProfile::from_fields(role, cities))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_object_body_is_a_failed_envelope() {
        for body in [json!([]), json!("ok"), json!(null), json!(1)] {
            let envelope = Envelope::from_value(body);
            assert!(!envelope.is_success());
            assert!(envelope.message().is_none());
        }
    }

    #[test]
    fn success_must_be_boolean_true() {
        assert!(!Envelope::from_value(json!({ "success": "true" })).is_success());
        assert!(!Envelope::from_value(json!({ "success": 1 })).is_success());
        assert!(!Envelope::from_value(json!({})).is_success());
        assert!(Envelope::from_value(json!({ "success": true })).is_success());
    }

    #[test]
    fn empty_message_is_discarded() {
        let envelope = Envelope::from_value(json!({ "success": false, "message": "" }));
        assert!(envelope.message().is_none());
    }

    #[test]
    fn rooms_listing_is_extracted() {
        let response = RoomsResponse::from_value(json!({
            "success": true,
            "rooms": [{ "id": "1", "hotel": {} }, null],
        }));

        assert_eq!(
            response,
            RoomsResponse::Listing(vec![json!({ "id": "1", "hotel": {} }), Value::Null])
        );
    }

    #[test]
    fn rooms_rejection_keeps_message() {
        let response = RoomsResponse::from_value(json!({ "success": false, "message": "down" }));
        assert_eq!(response, RoomsResponse::Rejected { message: Some("down".into()) });
    }

    #[test]
    fn rooms_not_an_array_is_malformed() {
        let response = RoomsResponse::from_value(json!({ "success": true, "rooms": {} }));
        assert_eq!(response, RoomsResponse::Malformed { message: None });

        let response = RoomsResponse::from_value(json!({ "success": true }));
        assert_eq!(response, RoomsResponse::Malformed { message: None });
    }

    #[test]
    fn user_profile_is_extracted() {
        let response = UserResponse::from_value(json!({
            "success": true,
            "role": "hotelOwner",
            "recentSearchedCities": ["Paris"],
        }));

        let UserResponse::Profile(profile) = response else {
            panic!("expected a profile response");
        };
        assert!(profile.is_owner());
        assert_eq!(profile.recent_searched_cities, vec!["Paris".to_owned()]);
    }

    #[test]
    fn user_rejection_without_message() {
        let response = UserResponse::from_value(json!({ "success": false }));
        assert_eq!(response, UserResponse::Rejected { message: None });
    }
}
