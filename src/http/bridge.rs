use axum::extract::RawQuery;

use crate::bridge::{self, BridgeError};
use crate::http::response::RedirectPage;
use crate::observability::metrics;

/// `GET /pay/bridge`: forward the browser to `target` with the remaining
/// query parameters appended.
pub async fn bridge_handler(RawQuery(query): RawQuery) -> Result<RedirectPage, BridgeError> {
    match bridge::bridge(query.as_deref().unwrap_or_default()) {
        Ok(bridged) => {
            tracing::debug!(
                scheme = bridged.redirect_url.scheme(),
                forwarded = bridged.forwarded,
                "Bridging redirect"
            );
            metrics::record_bridge("redirect");
            Ok(RedirectPage::new(&bridged.redirect_url))
        }
        Err(e) => {
            tracing::warn!(reason = e.kind(), error = %e, "Bridge request rejected");
            metrics::record_bridge(e.kind());
            Err(e)
        }
    }
}
