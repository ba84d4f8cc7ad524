use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A persisted user record
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Server-assigned object id, never taken from the client
    pub id: ObjectId,
    pub name: String,
    pub gender: String,
    pub age: i64,
}

impl User {
    pub fn new(id: ObjectId, name: String, gender: String, age: i64) -> Self {
        Self {
            id,
            name,
            gender,
            age,
        }
    }

    /// Build a new record from a client payload with a freshly generated id
    pub fn from_payload(payload: UserPayload) -> Self {
        Self::new(ObjectId::new(), payload.name, payload.gender, payload.age)
    }
}

/// Request body accepted by create and update.
///
/// Omitted fields fall back to their zero value, so an update always replaces
/// all three mutable fields. A client-supplied `id` is tolerated and dropped.
/// Anything else outside this shape is rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: i64,
}

impl UserPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// JSON view of a user: `{"id": <hex>, "name", "gender", "age"}`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub age: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name.clone(),
            gender: user.gender.clone(),
            age: user.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_full() {
        let payload = UserPayload::from_slice(br#"{"name":"Ann","gender":"F","age":30}"#).unwrap();
        assert_eq!(payload.name, "Ann");
        assert_eq!(payload.gender, "F");
        assert_eq!(payload.age, 30);
    }

    #[test]
    fn test_payload_missing_fields_are_zero_valued() {
        let payload = UserPayload::from_slice(br#"{"name":"A"}"#).unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.gender, "");
        assert_eq!(payload.age, 0);
    }

    #[test]
    fn test_payload_ignores_client_id() {
        let payload =
            UserPayload::from_slice(br#"{"id":"000000000000000000000001","name":"B"}"#).unwrap();
        let user = User::from_payload(payload);
        assert_ne!(user.id.to_hex(), "000000000000000000000001");
        assert_eq!(user.name, "B");
    }

    #[test]
    fn test_payload_rejects_bad_shapes() {
        assert!(UserPayload::from_slice(b"not json").is_err());
        assert!(UserPayload::from_slice(b"").is_err());
        assert!(UserPayload::from_slice(b"[]").is_err());
        assert!(UserPayload::from_slice(br#"{"age":"thirty"}"#).is_err());
        assert!(UserPayload::from_slice(br#"{"name":null}"#).is_err());
        assert!(UserPayload::from_slice(br#"{"name":"A","email":"a@b.c"}"#).is_err());
    }

    #[test]
    fn test_response_renders_hex_id() {
        let id = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let user = User::new(id, "Ann".into(), "F".into(), 30);
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "65a1f0c2e4b0a1b2c3d4e5f6",
                "name": "Ann",
                "gender": "F",
                "age": 30
            })
        );
    }
}
