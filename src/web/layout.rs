/// Escape text for use as HTML element content.
pub fn escape(raw: &str) -> String {
    html_escape::encode_text(raw).into_owned()
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attr(raw: &str) -> String {
    html_escape::encode_double_quoted_attribute(raw).into_owned()
}

/// Wrap `body` in the shared document shell. `body` must already be escaped.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Snoopy Airlines</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Full-page error with a retry link back to the same URL.
pub fn error_page() -> String {
    page(
        "Something went wrong",
        r#"<section class="error">
<h2>Oops! Something went wrong</h2>
<p>We could not load the page. Please try again later.</p>
<a class="button" href="">Retry</a>
</section>"#,
    )
}
