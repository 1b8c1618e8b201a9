//! Redirect URL construction.

use url::Url;

use crate::bridge::error::BridgeError;
use crate::bridge::query::QueryParams;

/// Append `forwarded` onto `target` and return the resulting URL.
///
/// Query parameters already present on `target` are kept and the forwarded
/// ones are added after them. Fragments stay at the end. Values are
/// percent-encoded as `application/x-www-form-urlencoded`.
pub fn build_redirect_url(target: &str, forwarded: &QueryParams) -> Result<Url, BridgeError> {
    let mut url = Url::parse(target).map_err(BridgeError::MalformedTarget)?;

    if !forwarded.is_empty() {
        let appended = forwarded.encode();
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{appended}"),
            _ => appended,
        };
        url.set_query(Some(&query));
    }

    Ok(url)
}
