use serde::{Deserialize, Serialize};

/// A named collection of people. Identifiers and `created_at` are assigned
/// by the remote service, never by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// An individual belonging to exactly one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub group_id: String,
    pub created_at: String,
    // The service omits this field when a person has no facts yet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,
    // De-normalized projection of the most relevant fact, for list views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_fact: Option<Fact>,
}

/// A free-text note attached to a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub content: String,
    pub person_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

/// Write payload for groups. Only supplied fields are serialized, so any
/// subset can be sent for create and update alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Write payload for people.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Wire shape for adding a fact: `{"content": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactPayload {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_payload_serializes_only_supplied_fields() {
        let payload = GroupPayload {
            name: Some("Friends".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Friends"}"#);
    }

    #[test]
    fn test_empty_payload_serializes_to_empty_object() {
        let json = serde_json::to_string(&PersonPayload::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_person_deserializes_without_facts() {
        let json = r#"{
            "id": "p1",
            "name": "Ada",
            "group_id": "g1",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.facts.is_empty());
        assert!(person.first_fact.is_none());
    }

    #[test]
    fn test_person_deserializes_with_first_fact() {
        let json = r#"{
            "id": "p1",
            "name": "Ada",
            "group_id": "g1",
            "created_at": "2024-01-01T00:00:00Z",
            "facts": [
                {"id": "f1", "content": "likes chess", "person_id": "p1", "created_at": "2024-01-02T00:00:00Z"}
            ],
            "first_fact": {"id": "f1", "content": "likes chess", "person_id": "p1", "created_at": "2024-01-02T00:00:00Z"}
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.facts.len(), 1);
        assert_eq!(person.first_fact.unwrap().content, "likes chess");
    }
}
