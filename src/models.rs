//! Payload shapes for the two endpoints the page consumes
//!
//! Both are read-only: deserialized once per render and never stored or
//! mutated. Unknown fields are ignored.

use serde::Deserialize;

/// A user record from the `GET /user/{id}` lookup API
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    /// Numeric account identifier
    pub id: u64,
    /// Display handle
    pub login: String,
    /// Public profile URL
    pub html_url: String,
}

/// The blog manifest: an ordered list of post summaries
#[derive(Debug, Clone, Deserialize)]
pub struct BlogManifest {
    /// Posts in the order they should be rendered
    pub contents: Vec<BlogPost>,
}

/// One post entry in the blog manifest
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    /// Label shown as the card title
    pub path: String,
    /// Full content the preview is cut from
    pub content: String,
    /// Location of the full post, relative to the blog directory
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_ignores_unknown_fields() {
        let json = r#"{
            "id": 53895123,
            "login": "octocat",
            "html_url": "https://github.com/octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/1"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.html_url, "https://github.com/octocat");
    }

    #[test]
    fn test_manifest_preserves_post_order() {
        let json = r#"{"contents":[
            {"path":"First","content":"a","url":"first.html"},
            {"path":"Second","content":"b","url":"second.html"}
        ]}"#;
        let manifest: BlogManifest = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = manifest.contents.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }

    #[test]
    fn test_manifest_rejects_missing_contents() {
        let result: Result<BlogManifest, _> = serde_json::from_str(r#"{"posts":[]}"#);
        assert!(result.is_err());
    }
}
