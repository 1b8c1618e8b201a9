//! Payment redirect bridge.
//!
//! # Data Flow
//! ```text
//! GET /pay/bridge?target=myapp://pay/done&orderId=123&pg_token=abc
//!     → query.rs (ordered multimap of decoded params)
//!     → take `target`, drop it from the forwarded set
//!     → redirect.rs (target + forwarded params → Url)
//!     → page.rs (meta refresh + script fallback)
//! ```
//!
//! Everything here is a pure function of the request query. No state is
//! shared between requests.

pub mod error;
pub mod page;
pub mod query;
pub mod redirect;

pub use error::BridgeError;
pub use query::QueryParams;
pub use redirect::build_redirect_url;

use url::Url;

/// Name of the control parameter holding the destination.
pub const TARGET_PARAM: &str = "target";

/// Outcome of a successful bridge.
#[derive(Debug, Clone)]
pub struct Bridged {
    /// Destination with the forwarded params appended.
    pub redirect_url: Url,
    /// Number of `(key, value)` pairs forwarded.
    pub forwarded: usize,
}

/// Resolve the redirect destination for a raw request query.
///
/// The first `target` value is the destination. Every other parameter is
/// appended onto it; `target` itself is never forwarded.
pub fn bridge(raw_query: &str) -> Result<Bridged, BridgeError> {
    let mut params = QueryParams::parse(raw_query);

    let target = match params.remove(TARGET_PARAM) {
        Some(values) => values.into_iter().next().unwrap_or_default(),
        None => return Err(BridgeError::MissingTarget),
    };
    // Non-UTF-8 bytes in the target become U+FFFD and are re-encoded by Url.
    let target = String::from_utf8_lossy(&target);
    if target.trim().is_empty() {
        return Err(BridgeError::MissingTarget);
    }

    let redirect_url = build_redirect_url(&target, &params)?;
    Ok(Bridged {
        redirect_url,
        forwarded: params.pairs().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_target_is_rejected() {
        for query in ["", "orderId=1", "target=", "target=%20%20%20", "target=+&x=1", "target"] {
            assert!(
                matches!(bridge(query), Err(BridgeError::MissingTarget)),
                "query {query:?} should be rejected"
            );
        }
    }

    #[test]
    fn target_is_never_forwarded() {
        let bridged = bridge("target=myapp%3A%2F%2Fpay&target=other&orderId=7").unwrap();
        assert_eq!(bridged.redirect_url.as_str(), "myapp://pay?orderId=7");
        assert_eq!(bridged.forwarded, 1);
        assert!(bridged
            .redirect_url
            .query_pairs()
            .all(|(key, _)| key != TARGET_PARAM));
    }

    #[test]
    fn target_position_does_not_matter() {
        let bridged =
            bridge("orderId=123&target=https://example.com/callback&pg_token=abc").unwrap();
        assert_eq!(
            bridged.redirect_url.as_str(),
            "https://example.com/callback?orderId=123&pg_token=abc"
        );
        assert_eq!(bridged.forwarded, 2);
    }

    #[test]
    fn differently_cased_target_keys_are_forwarded() {
        let bridged = bridge("target=myapp://pay&Target=x").unwrap();
        assert_eq!(bridged.redirect_url.as_str(), "myapp://pay?Target=x");
    }

    #[test]
    fn non_utf8_params_are_forwarded_verbatim() {
        let bridged = bridge("target=myapp://pay&msg=%B0%E1%C1%A6").unwrap();
        assert_eq!(bridged.redirect_url.as_str(), "myapp://pay?msg=%B0%E1%C1%A6");
    }

    #[test]
    fn target_inside_target_query_is_left_alone() {
        let bridged = bridge("target=myapp%3A%2F%2Fx%3Ftarget%3D1&a=2").unwrap();
        assert_eq!(bridged.redirect_url.as_str(), "myapp://x?target=1&a=2");
        assert_eq!(bridged.forwarded, 1);
    }

    #[test]
    fn unparseable_target_is_malformed() {
        assert!(matches!(
            bridge("target=not%20a%20uri"),
            Err(BridgeError::MalformedTarget(_))
        ));
    }
}
