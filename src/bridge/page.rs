//! HTML documents served by the bridge.

/// Replace every `"` with `&quot;`.
///
/// Only keeps the URL inside the quoted attribute and the quoted script
/// string. `<`, `>` and `</script>` sequences are not escaped.
pub fn escape_for_html_attribute(input: &str) -> String {
    input.replace('"', "&quot;")
}

/// Page that sends the browser to `redirect_to` via meta refresh, with a
/// script fallback for clients that ignore or delay the refresh.
pub fn redirect_page(redirect_to: &str) -> String {
    let escaped = escape_for_html_attribute(redirect_to);
    format!(
        r#"<html>
  <head>
    <meta http-equiv="refresh" content="0;url={escaped}" />
    <script>
      window.location.href = "{escaped}";
    </script>
  </head>
  <body>
    <p>Redirecting to app...</p>
  </body>
</html>
"#
    )
}

pub fn missing_target_page() -> &'static str {
    r#"<html><body>
  <h3>Missing target</h3>
  <p>target parameter is required.</p>
</body></html>
"#
}

pub fn malformed_target_page() -> &'static str {
    r#"<html><body>
  <h3>Malformed target</h3>
  <p>target parameter must be an absolute URI.</p>
</body></html>
"#
}
