use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog entry, kept exactly as it appears in the source document.
/// Only `id` and `tags` are ever looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    fields: Map<String, Value>,
}

impl Product {
    /// Compared strictly, so `1` and `"1"` are different ids.
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True when some entry of `tags` is an object whose `title` is exactly
    /// `title`. Anything else in `tags`, or no `tags` at all, never matches.
    pub fn has_tag(&self, title: &str) -> bool {
        self.fields
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| {
                tags.iter()
                    .any(|t| t.get("title").and_then(Value::as_str) == Some(title))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: Value) -> Product {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn passthrough_fields_survive_round_trip() {
        let src = json!({
            "id": "cjOFRrfLnBO",
            "description": "Blue sofa",
            "tags": [{ "title": "Blue", "slug": "blue" }],
            "urls": { "regular": "https://example.com/a.jpg" },
            "likes": 12
        });
        let product = parse(src.clone());
        assert_eq!(serde_json::to_value(&product).unwrap(), src);
    }

    #[test]
    fn output_bytes_match_source() {
        let src = r#"{"likes":3,"id":"a","tags":[{"slug":"x","title":"T"}],"n":1}"#;
        let product: Product = serde_json::from_str(src).unwrap();
        assert_eq!(serde_json::to_string(&product).unwrap(), src);
    }

    #[test]
    fn null_tags_are_kept() {
        let src = json!({ "id": "a", "tags": null, "n": 1 });
        let product = parse(src.clone());
        assert!(!product.has_tag("A"));
        assert_eq!(serde_json::to_value(&product).unwrap(), src);
    }

    #[test]
    fn absent_tags_stay_absent() {
        let src = json!({ "id": 7, "name": "untagged" });
        let product = parse(src.clone());
        assert!(product.field("tags").is_none());
        assert!(!product.has_tag("A"));
        assert_eq!(serde_json::to_value(&product).unwrap(), src);
    }

    #[test]
    fn untitled_tags_are_skipped() {
        let product = parse(json!({
            "id": 1,
            "tags": [{ "slug": "x" }, { "title": 5 }, "loose", { "title": "Dark" }]
        }));
        assert!(product.has_tag("Dark"));
        assert!(!product.has_tag("x"));
        assert!(!product.has_tag("5"));
    }

    #[test]
    fn has_tag_is_exact() {
        let product = parse(json!({ "id": 1, "tags": [{ "title": "Dark" }] }));
        assert!(product.has_tag("Dark"));
        assert!(!product.has_tag("dark"));
        assert!(!product.has_tag("Dar"));
    }

    #[test]
    fn id_is_not_coerced() {
        let product = parse(json!({ "id": 1 }));
        assert_eq!(product.id(), Some(&json!(1)));
        assert_ne!(product.id(), Some(&json!("1")));
    }
}
