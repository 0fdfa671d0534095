//! Static HTML report.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::GameRecord;

use super::sorted_for_display;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f0f0f0; }
        .container { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px;
                     border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; margin-bottom: 30px; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background-color: #4CAF50; color: white; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        tr:hover { background-color: #f5f5f5; }
        .total-games { margin-top: 20px; text-align: right; font-weight: bold; }
"#;

/// Build a self-contained HTML page listing the records by year and title.
#[must_use]
pub fn render_html(records: &[&GameRecord], heading: &str) -> String {
    let heading = escape_html(heading);
    let mut page = String::with_capacity(2048 + records.len() * 160);

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{heading}</title>\n"));
    page.push_str(&format!("<style>{STYLE}</style>\n"));
    page.push_str("</head>\n<body>\n<div class=\"container\">\n");
    page.push_str(&format!("<h1>{heading}</h1>\n"));
    page.push_str("<table>\n<tr><th>Year</th><th>Title</th><th>Publisher</th><th>Region</th></tr>\n");

    for record in sorted_for_display(records.iter().copied()) {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            record.year,
            escape_html(&record.title),
            escape_html(&record.publisher),
            escape_html(&record.region),
        ));
    }

    page.push_str("</table>\n");
    page.push_str(&format!("<div class=\"total-games\">Total games: {}</div>\n", records.len()));
    page.push_str("</div>\n</body>\n</html>\n");
    page
}

/// Render the report and write it to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be written.
pub fn write_html_report(records: &[&GameRecord], heading: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_html(records, heading))?;
    info!(path = %path.display(), records = records.len(), "HTML table saved");
    Ok(())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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
