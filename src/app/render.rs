//! HTML rendering for the tracking form page.

use std::fmt::Write;

use crate::models::TrackingResult;

/// Values shown on the tracking page.
#[derive(Debug, Default)]
pub struct PageContext {
    /// Barcode echoed back into the form input
    pub barcode: String,
    pub result: Option<TrackingResult>,
    pub error: Option<String>,
}

/// Escapes text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn optional(value: Option<&str>) -> String {
    escape_html(value.unwrap_or("—"))
}

/// Renders the full tracking page.
pub fn render_page(context: &PageContext) -> String {
    let mut body = String::new();

    if let Some(error) = &context.error {
        let _ = write!(
            body,
            r#"<div class="error" role="alert">{}</div>"#,
            escape_html(error)
        );
    }

    if let Some(result) = &context.result {
        body.push_str(&render_result(result));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="fa" dir="rtl">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>رهگیری مرسولات پست</title>
<style>
body {{ font-family: Tahoma, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
.error {{ background: #fdecea; color: #b71c1c; padding: .75rem; border-radius: 4px; }}
table {{ width: 100%; border-collapse: collapse; margin-top: 1rem; }}
th, td {{ border: 1px solid #ddd; padding: .5rem; text-align: right; }}
</style>
</head>
<body>
<h1>رهگیری مرسولات پست</h1>
<form method="post" action="/">
<label for="barcode">کد رهگیری</label>
<input id="barcode" name="barcode" inputmode="numeric" value="{barcode}" required>
<button type="submit">رهگیری</button>
</form>
{body}
</body>
</html>
"#,
        barcode = escape_html(&context.barcode),
        body = body,
    )
}

fn render_result(result: &TrackingResult) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<section class="result">
<h2>نتیجه رهگیری {barcode}</h2>
<dl>
<dt>وضعیت فعلی</dt><dd>{status}</dd>
<dt>فرستنده</dt><dd>{sender}</dd>
<dt>گیرنده</dt><dd>{receiver}</dd>
</dl>
"#,
        barcode = escape_html(&result.barcode),
        status = optional(result.current_status.as_deref()),
        sender = optional(result.sender.as_deref()),
        receiver = optional(result.receiver.as_deref()),
    );

    if result.events.is_empty() {
        html.push_str("<p>رویدادی برای این مرسوله ثبت نشده است.</p>\n");
    } else {
        html.push_str(
            "<table>\n<thead><tr><th>شرح</th><th>تاریخ</th><th>ساعت</th><th>محل</th></tr></thead>\n<tbody>\n",
        );
        for event in &result.events {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&event.description),
                optional(event.date.as_deref()),
                optional(event.time.as_deref()),
                optional(event.location.as_deref()),
            );
        }
        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackingEvent;
    use serde_json::json;

    fn sample_result() -> TrackingResult {
        TrackingResult {
            barcode: "12345".to_string(),
            current_status: Some("Delivered".to_string()),
            sender: Some("<script>alert(1)</script>".to_string()),
            receiver: None,
            events: vec![TrackingEvent {
                description: "Accepted & sorted".to_string(),
                date: Some("1402/01/01".to_string()),
                time: None,
                location: Some("Tehran".to_string()),
            }],
            raw_response: json!({}),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("وضعیت نامشخص"), "وضعیت نامشخص");
    }

    #[test]
    fn test_render_empty_form() {
        let html = render_page(&PageContext::default());
        assert!(html.contains(r#"<form method="post" action="/">"#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_render_result_escapes_upstream_values() {
        let html = render_page(&PageContext {
            barcode: "12345".to_string(),
            result: Some(sample_result()),
            error: None,
        });
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Accepted &amp; sorted"));
        assert!(html.contains("<td>Tehran</td>"));
    }

    #[test]
    fn test_render_error_echoes_barcode() {
        let html = render_page(&PageContext {
            barcode: "12\"ab".to_string(),
            result: None,
            error: Some("کد رهگیری باید فقط شامل اعداد باشد.".to_string()),
        });
        assert!(html.contains("کد رهگیری باید فقط شامل اعداد باشد."));
        assert!(html.contains(r#"value="12&quot;ab""#));
    }

    #[test]
    fn test_render_result_without_events() {
        let mut result = sample_result();
        result.events.clear();
        let html = render_page(&PageContext {
            barcode: "12345".to_string(),
            result: Some(result),
            error: None,
        });
        assert!(html.contains("رویدادی برای این مرسوله ثبت نشده است."));
        assert!(!html.contains("<table>"));
    }
}
