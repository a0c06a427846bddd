//! Helpers for inline-encoded avatar / logo payloads.
//!
//! Media fields hold either a plain URL or a `data:image/...;base64,` payload
//! produced by the upload form. Undecodable payloads are dropped rather than
//! persisted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// True when the value is an inline `data:image/...` payload.
pub fn is_inline_image(value: &str) -> bool {
    value.starts_with("data:image/")
}

/// Validate a media field value. Plain URLs always pass; inline payloads must
/// carry a `;base64` marker and decode cleanly.
pub fn is_valid_media(value: &str) -> bool {
    if !is_inline_image(value) {
        return true;
    }
    let Some((header, payload)) = value.split_once(',') else {
        return false;
    };
    header.ends_with(";base64") && STANDARD.decode(payload).is_ok()
}

/// Drop an undecodable inline payload, keeping URLs and good payloads.
pub fn sanitize_media(value: Option<String>) -> Option<String> {
    match value {
        Some(v) if !is_valid_media(&v) => {
            tracing::debug!("dropping undecodable inline media payload");
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG.
    const PNG_PAYLOAD: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    #[test]
    fn urls_pass_through() {
        assert!(is_valid_media("https://cdn.example.com/avatar.png"));
        assert_eq!(
            sanitize_media(Some("https://cdn.example.com/a.png".into())),
            Some("https://cdn.example.com/a.png".into())
        );
    }

    #[test]
    fn valid_inline_payload_passes() {
        let value = format!("data:image/png;base64,{PNG_PAYLOAD}");
        assert!(is_inline_image(&value));
        assert!(is_valid_media(&value));
    }

    #[test]
    fn broken_inline_payload_is_dropped() {
        assert!(!is_valid_media("data:image/png;base64,@@not-base64@@"));
        assert!(!is_valid_media("data:image/png"));
        assert_eq!(sanitize_media(Some("data:image/png;base64,%%".into())), None);
        assert_eq!(sanitize_media(None), None);
    }
}
