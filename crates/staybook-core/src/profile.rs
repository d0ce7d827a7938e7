//! User profile facts.

use serde_json::Value;

/// Role string the backend assigns to hotel owners.
pub const HOTEL_OWNER_ROLE: &str = "hotelOwner";

/// Profile of the signed-in user, as returned by the user resource.
///
/// Transient: only [`UserProfile::is_owner`] and the search history are kept
/// by the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Backend role, if the response carried one.
    pub role: Option<String>,
    /// Recently searched cities, most recent first as the server orders them.
    pub recent_searched_cities: Vec<String>,
}

impl UserProfile {
    /// Build a profile from the raw `role` and `recentSearchedCities` fields.
    ///
    /// The city list is coerced: anything that is not an array becomes empty,
    /// and non-string elements of an array are dropped.
    pub fn from_fields(role: Option<Value>, cities: Option<Value>) -> Self {
        let role = match role {
            Some(Value::String(role)) => Some(role),
            _ => None,
        };

        Self { role, recent_searched_cities: coerce_cities(cities) }
    }

    /// Whether the user owns a hotel.
    pub fn is_owner(&self) -> bool {
        self.role.as_deref() == Some(HOTEL_OWNER_ROLE)
    }
}

fn coerce_cities(value: Option<Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let total = items.len();
    let cities: Vec<String> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(city) => Some(city),
            _ => None,
        })
        .collect();

    if cities.len() != total {
        tracing::debug!(dropped = total - cities.len(), "ignoring non-string searched cities");
    }

    cities
}
