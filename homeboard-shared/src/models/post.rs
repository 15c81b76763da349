use serde::{Deserialize, Serialize};

/// A post authored by a directory user. Read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Id of the authoring user.
    pub user_id: i64,

    /// Unique identifier for the post.
    pub id: i64,

    /// Post headline.
    pub title: String,

    /// Post body text.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_camel_case() {
        let json = r#"{"userId": 3, "id": 21, "title": "asperiores", "body": "ullam et"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.user_id, 3);
        assert_eq!(post.id, 21);
        assert_eq!(post.title, "asperiores");
        assert_eq!(post.body, "ullam et");
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post {
            user_id: 3,
            id: 21,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_string(&post).unwrap();

        assert!(json.contains("\"userId\":3"));
        assert!(!json.contains("user_id"));
    }
}
