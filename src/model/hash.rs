use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};

/// Maximum length of a fallback object id.
pub const MAX_FALLBACK_ID_LEN: usize = 63;

/// Derive a repeatable object id from the serialized content of a value.
///
/// Used when an entity has neither a `unique_id` nor a `name`. Identical content always yields
/// the same id, different content is likely, but not guaranteed, to yield a different one. The
/// result only uses `[A-Za-z0-9_-]`, so it is a valid topic level.
pub fn fallback_id<T: serde::Serialize + ?Sized>(value: &T) -> String {
    let content = match serde_json::to_vec(value) {
        Ok(content) => content,
        Err(err) => {
            // plain structs of strings and numbers don't fail, but the trait bound allows it
            log::warn!("unable to serialize value for fallback id: {err}");
            Vec::new()
        }
    };

    let mut id = URL_SAFE_NO_PAD.encode(Sha256::digest(&content));
    id.truncate(MAX_FALLBACK_ID_LEN);
    id
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repeatable() {
        let value = json!({"state_topic": "some/topic", "qos": 1});
        assert_eq!(fallback_id(&value), fallback_id(&value.clone()));
    }

    #[test]
    fn test_shape() {
        for value in [
            json!({}),
            json!({"state_topic": "a"}),
            json!({"state_topic": "a".repeat(1000)}),
        ] {
            let id = fallback_id(&value);
            assert!(!id.is_empty());
            assert!(id.len() <= MAX_FALLBACK_ID_LEN);
            assert!(!id.contains('='));
            assert!(id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn test_content_sensitive() {
        assert_ne!(
            fallback_id(&json!({"state_topic": "a"})),
            fallback_id(&json!({"state_topic": "b"}))
        );
    }
}
