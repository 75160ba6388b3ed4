//! JSON-P bridge: callback token generation, the process-wide registration
//! lifecycle, and unwrapping of the `token({...})` response body.

use crate::domain::model::GistPayload;
use crate::utils::error::{EmbedError, Result};
use rand::Rng;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// Process-wide registry of live callback tokens.
///
/// Lifecycle is explicit: `register` before the request is issued, `take`
/// exactly once when the response arrives. A token that was never registered
/// (or was already taken) is rejected, so a response can only ever be
/// delivered to the invocation that asked for it.
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    tokens: Mutex<HashSet<String>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by all invocations in this process.
    pub fn global() -> &'static CallbackRegistry {
        static GLOBAL: OnceLock<CallbackRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CallbackRegistry::new)
    }

    /// Registers `token`. Returns false when the token is already live, in
    /// which case the caller should draw a fresh one.
    pub fn register(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().insert(token.to_string())
    }

    /// Consumes the registration. Single use; a second `take` of the same
    /// token fails.
    pub fn take(&self, token: &str) -> Result<()> {
        if self.tokens.lock().unwrap().remove(token) {
            Ok(())
        } else {
            Err(EmbedError::UnknownCallback {
                token: token.to_string(),
            })
        }
    }

    pub fn is_registered(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains(token)
    }
}

/// Fresh per-invocation callback name: two independent random draws combined
/// arithmetically, decimal point stripped. Collision avoidance is informal,
/// not a security boundary.
pub fn callback_token() -> String {
    let mut rng = rand::thread_rng();
    let draw: f64 = rng.gen::<f64>() + rng.gen::<f64>();
    format!("__embedGist{}", draw.to_string().replace('.', ""))
}

/// Unwraps a JSON-P body of the shape `token({...})` into the gist payload.
/// Tolerates comment padding before the call and a trailing `;`.
pub fn unwrap_jsonp(body: &str, token: &str) -> Result<GistPayload> {
    let call = format!("{token}(");
    let open = body
        .find(&call)
        .ok_or_else(|| EmbedError::MalformedPayload {
            reason: format!("response does not invoke \"{token}\""),
        })?;
    let start = open + call.len();
    let end = body.rfind(')').filter(|&end| end >= start).ok_or_else(|| {
        EmbedError::MalformedPayload {
            reason: "unterminated callback invocation".to_string(),
        }
    })?;
    let payload = serde_json::from_str(&body[start..end])?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_prefixed_and_digit_only_after_prefix() {
        let token = callback_token();
        let suffix = token.strip_prefix("__embedGist").unwrap();
        assert!(!suffix.is_empty());
        assert!(!suffix.contains('.'));
    }

    #[test]
    fn test_two_draws_rarely_collide() {
        let a = callback_token();
        let b = callback_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_register_take_lifecycle() {
        let registry = CallbackRegistry::new();
        assert!(registry.register("cb1"));
        assert!(registry.is_registered("cb1"));
        registry.take("cb1").unwrap();
        assert!(!registry.is_registered("cb1"));
    }

    #[test]
    fn test_take_is_single_use() {
        let registry = CallbackRegistry::new();
        registry.register("cb1");
        registry.take("cb1").unwrap();
        let err = registry.take("cb1").unwrap_err();
        assert!(matches!(err, EmbedError::UnknownCallback { .. }));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = CallbackRegistry::new();
        assert!(registry.register("cb1"));
        assert!(!registry.register("cb1"));
    }

    #[test]
    fn test_unwrap_jsonp_happy_path() {
        let body = r#"/**/cb42({"files":["a.js"],"div":"<div></div>"});"#;
        let payload = unwrap_jsonp(body, "cb42").unwrap();
        assert_eq!(payload.files, vec!["a.js"]);
        assert_eq!(payload.div, "<div></div>");
    }

    #[test]
    fn test_unwrap_jsonp_wrong_token() {
        let body = r#"other({"files":[],"div":""})"#;
        let err = unwrap_jsonp(body, "cb42").unwrap_err();
        assert!(matches!(err, EmbedError::MalformedPayload { .. }));
    }

    #[test]
    fn test_unwrap_jsonp_bad_json() {
        let body = "cb42(not json)";
        let err = unwrap_jsonp(body, "cb42").unwrap_err();
        assert!(matches!(err, EmbedError::PayloadError(_)));
    }
}
