//! Room catalog entries.
//!
//! The backend returns rooms as loosely-shaped records. A [`Room`] can only be
//! built through validation, so every value of the type carries a non-empty
//! identifier and an embedded hotel object. All other fields are kept verbatim
//! for consumers; this layer never interprets them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RoomRejection;

/// Keys accepted for the room identifier, in lookup order.
///
/// The booking backend emits its document key as `_id`.
const ID_KEYS: [&str; 2] = ["id", "_id"];

/// Key of the embedded hotel record.
const HOTEL_KEY: &str = "hotel";

/// A validated room record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Room {
    id: String,
    hotel: Map<String, Value>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Room {
    /// Build a room from an identifier and hotel record.
    ///
    /// Applies the same validation as decoding from JSON.
    pub fn new(id: impl Into<String>, hotel: Map<String, Value>) -> Result<Self, RoomRejection> {
        let mut record = Map::new();
        record.insert("id".to_owned(), Value::String(id.into()));
        record.insert(HOTEL_KEY.to_owned(), Value::Object(hotel));
        Self::try_from(Value::Object(record))
    }

    /// Unique room identifier. Never empty.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Embedded hotel record.
    pub fn hotel(&self) -> &Map<String, Value> {
        &self.hotel
    }

    /// Any other field of the original record, e.g. `pricePerNight`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Remaining fields, excluding `id` and `hotel`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Value> for Room {
    type Error = RoomRejection;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(RoomRejection::Missing);
        };

        let id = ID_KEYS
            .iter()
            .find_map(|key| match fields.get(*key) {
                Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
                _ => None,
            })
            .ok_or(RoomRejection::MissingId)?;

        let Some(Value::Object(hotel)) = fields.remove(HOTEL_KEY) else {
            return Err(RoomRejection::MissingHotel);
        };

        for key in ID_KEYS {
            fields.remove(key);
        }

        Ok(Self { id, hotel, fields })
    }
}

/// Entry that failed validation, with its position in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedRoom {
    /// Index in the server's listing.
    pub index: usize,
    /// Why the entry was dropped.
    pub reason: RoomRejection,
}

/// Outcome of filtering a raw room listing.
///
/// `rooms` preserves server order. Rejections are logged as they are found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomBatch {
    /// Entries that passed validation.
    pub rooms: Vec<Room>,
    /// Entries that were dropped.
    pub rejected: Vec<RejectedRoom>,
}

impl RoomBatch {
    /// Validate each entry independently, keeping the ones that pass.
    pub fn filter(entries: Vec<Value>) -> Self {
        let mut batch = Self::default();

        for (index, entry) in entries.into_iter().enumerate() {
            match Room::try_from(entry) {
                Ok(room) => batch.rooms.push(room),
                Err(reason) => {
                    tracing::warn!(index, %reason, "skipping invalid room");
                    batch.rejected.push(RejectedRoom { index, reason });
                },
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_record_with_id_and_hotel() {
        let room = Room::try_from(json!({
            "id": "r1",
            "hotel": { "name": "Grand" },
            "pricePerNight": 120,
        }))
        .unwrap();

        assert_eq!(room.id(), "r1");
        assert_eq!(room.hotel().get("name"), Some(&json!("Grand")));
        assert_eq!(room.get("pricePerNight"), Some(&json!(120)));
        assert!(room.get("id").is_none());
    }

    #[test]
    fn accepts_document_id_key() {
        let room = Room::try_from(json!({ "_id": "abc", "hotel": {} })).unwrap();
        assert_eq!(room.id(), "abc");
        assert!(room.fields().is_empty());
    }

    #[test]
    fn rejects_null_and_scalars_as_missing() {
        assert_eq!(Room::try_from(Value::Null), Err(RoomRejection::Missing));
        assert_eq!(Room::try_from(json!(7)), Err(RoomRejection::Missing));
        assert_eq!(Room::try_from(json!("room")), Err(RoomRejection::Missing));
    }

    #[test]
    fn rejects_empty_or_non_string_id() {
        assert_eq!(Room::try_from(json!({ "id": "", "hotel": {} })), Err(RoomRejection::MissingId));
        assert_eq!(Room::try_from(json!({ "id": 4, "hotel": {} })), Err(RoomRejection::MissingId));
        assert_eq!(Room::try_from(json!({ "hotel": {} })), Err(RoomRejection::MissingId));
    }

    #[test]
    fn rejects_null_or_non_object_hotel() {
        assert_eq!(Room::try_from(json!({ "id": "1" })), Err(RoomRejection::MissingHotel));
        assert_eq!(
            Room::try_from(json!({ "id": "1", "hotel": null })),
            Err(RoomRejection::MissingHotel)
        );
        assert_eq!(
            Room::try_from(json!({ "id": "1", "hotel": "h-1" })),
            Err(RoomRejection::MissingHotel)
        );
    }

    #[test]
    fn serializes_back_with_id_and_hotel() {
        let room = Room::try_from(json!({ "_id": "r9", "hotel": { "city": "Oslo" }, "beds": 2 }))
            .unwrap();

        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value, json!({ "id": "r9", "hotel": { "city": "Oslo" }, "beds": 2 }));

        let decoded: Room = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, room);
    }

    #[test]
    fn filter_reports_each_rejection() {
        let batch = RoomBatch::filter(vec![
            json!({ "id": "1", "hotel": {} }),
            Value::Null,
            json!({ "id": "2" }),
            json!({ "hotel": {} }),
        ]);

        assert_eq!(batch.rooms.len(), 1);
        assert_eq!(batch.rooms[0].id(), "1");
        assert_eq!(batch.rejected, vec![
            RejectedRoom { index: 1, reason: RoomRejection::Missing },
            RejectedRoom { index: 2, reason: RoomRejection::MissingHotel },
            RejectedRoom { index: 3, reason: RoomRejection::MissingId },
        ]);
    }

    #[test]
    fn new_validates_id() {
        assert_eq!(Room::new("", Map::new()), Err(RoomRejection::MissingId));
        assert_eq!(Room::new("x", Map::new()).map(|r| r.id().to_owned()), Ok("x".to_owned()));
    }
}
