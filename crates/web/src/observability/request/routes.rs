//! Route labels for spans and metrics.

/// Label for requests the router could not resolve to any route.
pub(super) const UNMATCHED: &str = "unmatched";

/// Labels a request by the route pattern it resolved to, such as
/// `/product/{uuid}/image`, so the label set is fixed by the route tree.
pub(super) fn route_label(matched_path: &str) -> String {
    if matched_path.is_empty() {
        return UNMATCHED.to_owned();
    }

    format!("/{}", matched_path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_requests_share_one_label() {
        assert_eq!(route_label(""), UNMATCHED);
    }

    #[test]
    fn patterns_gain_a_leading_slash() {
        assert_eq!(route_label("product/create"), "/product/create");
        assert_eq!(route_label("product/{uuid}/image"), "/product/{uuid}/image");
    }
}
