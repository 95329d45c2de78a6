//! Page rendering module
//!
//! Pure functions from a [`Document`] to an HTML string. List items and
//! form contents are HTML-escaped on render.

use crate::store::Document;
use std::fmt::Write;

/// Render the public read view listing both lists.
pub fn pain_points_page(doc: &Document) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  \
         <title>Pain Points</title>\n  \
         <link rel=\"stylesheet\" href=\"/style.css\">\n</head>\n<body>\n",
    );
    push_nav(&mut html);
    html.push_str("<h1>Pain Points</h1>\n<section>\n  <h2>Sustainability Issues</h2>\n  <ul>");
    push_items(&mut html, &doc.sustainability);
    html.push_str("</ul>\n</section>\n<section>\n  <h2>Third-Party Integrations</h2>\n  <ul>");
    push_items(&mut html, &doc.integrations);
    html.push_str("</ul>\n</section>\n</body>\n</html>");
    html
}

/// Render the admin view: a form with two textareas pre-filled with the
/// current lists, one line per item, posting back to `/admin`.
pub fn admin_page(doc: &Document) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  \
         <title>Admin Panel</title>\n  \
         <link rel=\"stylesheet\" href=\"/style.css\">\n</head>\n<body>\n",
    );
    push_nav(&mut html);
    html.push_str("<h1>Admin Panel</h1>\n<form method=\"POST\" action=\"/admin\">\n");
    push_textarea(&mut html, "Sustainability Issues:", "sustainability", &doc.sustainability);
    html.push_str("  <br><br>\n");
    push_textarea(&mut html, "Third-Party Integrations:", "integrations", &doc.integrations);
    html.push_str(
        "  <br><br>\n  <button type=\"submit\">Save</button>\n</form>\n</body>\n</html>",
    );
    html
}

fn push_nav(html: &mut String) {
    html.push_str(
        "<nav>\n  <a href=\"/pain-points\">Pain Points</a> | \
         <a href=\"/admin\">Admin</a>\n</nav>\n",
    );
}

fn push_items(html: &mut String, items: &[String]) {
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape_html(item));
    }
}

fn push_textarea(html: &mut String, label: &str, name: &str, items: &[String]) {
    let _ = write!(
        html,
        "  <label>{label}<br>\n    <textarea name=\"{name}\" rows=\"5\" cols=\"40\">{}</textarea>\n  </label>\n",
        escape_html(&items.join("\n"))
    );
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            sustainability: vec!["Slow builds".to_string()],
            integrations: vec!["Stripe API".to_string()],
        }
    }

    #[test]
    fn test_read_view_lists_items() {
        let html = pain_points_page(&sample_document());
        assert!(html.contains("<li>Slow builds</li>"));
        assert!(html.contains("<li>Stripe API</li>"));
        assert!(html.contains("Sustainability Issues"));
        assert!(html.contains("Third-Party Integrations"));
    }

    #[test]
    fn test_read_view_escapes_items() {
        let doc = Document {
            sustainability: vec!["<script>alert(1)</script>".to_string()],
            integrations: vec![],
        };
        let html = pain_points_page(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_admin_view_prefills_textareas() {
        let doc = Document {
            sustainability: vec!["a".to_string(), "b".to_string()],
            integrations: vec!["c".to_string()],
        };
        let html = admin_page(&doc);
        assert!(html.contains("<textarea name=\"sustainability\" rows=\"5\" cols=\"40\">a\nb</textarea>"));
        assert!(html.contains("<textarea name=\"integrations\" rows=\"5\" cols=\"40\">c</textarea>"));
        assert!(html.contains("method=\"POST\""));
        assert!(html.contains("action=\"/admin\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_html("plain"), "plain");
    }
}
