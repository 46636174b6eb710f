//! `x-request-id` handling.

use uuid::Uuid;

pub(super) const HEADER: &str = "x-request-id";

/// Longest caller-supplied id that is echoed back.
const MAX_LEN: usize = 128;

/// The caller's id when it is short printable ASCII, otherwise a fresh UUIDv7.
pub(super) fn resolve(incoming: Option<&str>) -> String {
    incoming
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_LEN)
        .filter(|id| id.bytes().all(|byte| byte.is_ascii_graphic()))
        .map_or_else(|| Uuid::now_v7().to_string(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_generated(id: &str) -> bool {
        Uuid::parse_str(id).is_ok()
    }

    #[test]
    fn caller_id_is_kept() {
        assert_eq!(resolve(Some(" checkout-42 ")), "checkout-42");
    }

    #[test]
    fn blank_id_is_replaced() {
        assert!(is_generated(&resolve(Some("   "))));
        assert!(is_generated(&resolve(None)));
    }

    #[test]
    fn oversized_or_unprintable_ids_are_replaced() {
        assert!(is_generated(&resolve(Some(&"x".repeat(MAX_LEN + 1)))));
        assert!(is_generated(&resolve(Some("two words"))));
    }
}
