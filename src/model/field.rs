//! Serde helpers shared by the request bodies.

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Combine with `#[serde(default)]`: an absent key stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(value))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserializes an optional field that may be omitted but never sent as `null`.
///
/// Used for NOT NULL columns in update bodies: an absent key stays `None` through
/// `#[serde(default)]`, while an explicit `null` is a deserialization error.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRoomNumber {
    Text(String),
    Number(i64),
}

impl From<RawRoomNumber> for String {
    fn from(raw: RawRoomNumber) -> Self {
        match raw {
            RawRoomNumber::Text(text) => text,
            RawRoomNumber::Number(number) => number.to_string(),
        }
    }
}

/// Deserializes a room number sent either as a JSON string or as an integer.
///
/// Room numbers are business-assigned text keys, but clients commonly send `305`
/// rather than `"305"`.
pub fn room_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawRoomNumber>::deserialize(deserializer)?.map(String::from))
}

/// [`room_number`] for update bodies, where `null` is rejected.
pub fn non_null_room_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    RawRoomNumber::deserialize(deserializer).map(|raw| Some(raw.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "nullable")]
        address: Option<Option<String>>,
        #[serde(default, deserialize_with = "room_number")]
        room: Option<String>,
        #[serde(default, deserialize_with = "non_null")]
        email: Option<String>,
    }

    #[test]
    fn distinguishes_absent_from_null() {
        let absent: Body = serde_json::from_str("{}").unwrap();
        let null: Body = serde_json::from_str(r#"{"address": null}"#).unwrap();
        let value: Body = serde_json::from_str(r#"{"address": "10 Guest Lane"}"#).unwrap();

        assert_eq!(absent.address, None);
        assert_eq!(null.address, Some(None));
        assert_eq!(value.address, Some(Some("10 Guest Lane".to_string())));
    }

    #[test]
    fn accepts_numeric_room_numbers() {
        let number: Body = serde_json::from_str(r#"{"room": 305}"#).unwrap();
        let text: Body = serde_json::from_str(r#"{"room": "305A"}"#).unwrap();

        assert_eq!(number.room.as_deref(), Some("305"));
        assert_eq!(text.room.as_deref(), Some("305A"));
    }

    #[test]
    fn rejects_other_room_number_types() {
        let result = serde_json::from_str::<Body>(r#"{"room": true}"#);

        assert!(result.is_err());
    }

    #[test]
    fn non_null_allows_absence_but_not_null() {
        let absent: Body = serde_json::from_str("{}").unwrap();
        let value: Body = serde_json::from_str(r#"{"email": "ada@example.com"}"#).unwrap();
        let null = serde_json::from_str::<Body>(r#"{"email": null}"#);

        assert_eq!(absent.email, None);
        assert_eq!(value.email.as_deref(), Some("ada@example.com"));
        assert!(null.is_err());
    }
}
