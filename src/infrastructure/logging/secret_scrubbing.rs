use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_SCRUBBER: LazyLock<SecretScrubber> = LazyLock::new(SecretScrubber::new);

/// Scrub a message with the shared default scrubber.
pub fn scrub(message: &str) -> String {
    DEFAULT_SCRUBBER.scrub_message(message)
}

/// Redacts credentials from text before it reaches logs or error messages
#[derive(Clone)]
pub struct SecretScrubber {
    linear_key_pattern: Regex,
    authorization_pattern: Regex,
    bearer_pattern: Regex,
    field_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            // Match Linear personal API keys and OAuth tokens: lin_api_..., lin_oauth_...
            linear_key_pattern: Regex::new(r"lin_(?:api|oauth)_[a-zA-Z0-9]{16,}")
                .expect("linear key pattern is valid"),
            // Match raw Authorization header values
            authorization_pattern: Regex::new(r"(?i)authorization:\s*[^\s,]+")
                .expect("authorization pattern is valid"),
            // Match Bearer tokens
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+")
                .expect("bearer pattern is valid"),
            // Match apiKey / api_key / token / secret fields in JSON or key=value form
            field_pattern: Regex::new(
                r#"(["']?(?:apiKey|api_key|apikey|token|secret)["']?\s*[:=]\s*)["']?[^"'\s,}]+["']?"#,
            )
            .expect("field pattern is valid"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .linear_key_pattern
            .replace_all(message, "[API_KEY_REDACTED]")
            .to_string();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .authorization_pattern
            .replace_all(&scrubbed, "Authorization: [REDACTED]")
            .to_string();
        scrubbed = self
            .field_pattern
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .to_string();
        scrubbed
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
