//! Self-contained HTML report. One row per chat, in report order.

use crate::domain::{DomainError, Report};
use crate::ports::RendererPort;
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Telegram Groups Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; }
        h1 { color: #0088cc; text-align: center; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 12px 15px; border: 1px solid #ddd; text-align: left; }
        th { background-color: #0088cc; color: white; position: sticky; top: 0; }
        tr:nth-child(even) { background-color: #f2f2f2; }
        tr:hover { background-color: #e1f5fe; }
        .timestamp { font-size: 0.8em; text-align: center; margin-top: 20px; color: #666; }
        a { color: #0088cc; text-decoration: none; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <h1>Telegram Groups Report</h1>
    <table>
        <thead>
            <tr>
                <th>Name</th>
                <th>Member Count</th>
                <th>Creation Date</th>
                <th>Invite Link</th>
            </tr>
        </thead>
        <tbody>
"#;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl RendererPort for HtmlRenderer {
    fn render(&self, report: &Report) -> Result<String, DomainError> {
        let mut out = String::with_capacity(HEAD.len() + report.len() * 256);
        out.push_str(HEAD);
        for chat in &report.chats {
            let href = chat.invite_link.as_deref().unwrap_or("#");
            write!(
                out,
                r#"            <tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><a href="{}" target="_blank">Invite Link</a></td>
            </tr>
"#,
                escape(&chat.title),
                chat.member_count,
                chat.created,
                escape(href)
            )
            .map_err(|e| DomainError::Render(e.to_string()))?;
        }
        write!(
            out,
            r#"        </tbody>
    </table>
    <div class="timestamp">Report generated at: {}</div>
</body>
</html>
"#,
            report.generated_at.format(TIMESTAMP_FORMAT)
        )
        .map_err(|e| DomainError::Render(e.to_string()))?;
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

/// Escape text for element content and double-quoted attributes.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
