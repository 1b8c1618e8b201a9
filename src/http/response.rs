//! Response mapping for the bridge.
//!
//! Successful bridges become a 200 redirect page. Every `BridgeError` maps
//! to 400 with a static page that never echoes the request.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use url::Url;

use crate::bridge::{page, BridgeError};

/// 200 `text/html` page redirecting to a computed URL.
#[derive(Debug, Clone)]
pub struct RedirectPage(String);

impl RedirectPage {
    pub fn new(redirect_to: &Url) -> Self {
        Self(page::redirect_page(redirect_to.as_str()))
    }

    pub fn body(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for RedirectPage {
    fn into_response(self) -> Response {
        (StatusCode::OK, Html(self.0)).into_response()
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let body = match self {
            BridgeError::MissingTarget => page::missing_target_page(),
            BridgeError::MalformedTarget(_) => page::malformed_target_page(),
        };
        (StatusCode::BAD_REQUEST, Html(body)).into_response()
    }
}
