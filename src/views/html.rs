//! HTML helpers shared by every page

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap page content in the site layout
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/fruits">All Fruits</a>
    <a href="/fruits/new">Add a Fruit</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}
