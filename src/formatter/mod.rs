use crate::cards;
use crate::search::SearchResultRow;
use serde::Serialize;
use std::fmt::Write;

/// Output format types
#[derive(Debug, Clone)]
pub enum Format {
    Cli,
    Json,
    Markdown,
    Csv,
    /// The messaging extension response the bot would return
    Cards,
}

impl Format {
    /// Create format from string
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "md" | "markdown" => Self::Markdown,
            "csv" => Self::Csv,
            "cards" | "card" => Self::Cards,
            _ => Self::Cli,
        }
    }

    /// Render search rows, keeping at most `limit`
    pub fn render_rows(&self, query: &str, rows: &[SearchResultRow], limit: usize) -> Result<String, anyhow::Error> {
        let limited_rows = &rows[..std::cmp::min(rows.len(), limit)];

        match self {
            Self::Cli => Ok(self.format_cli(limited_rows)),
            Self::Json => self.format_json(query, limited_rows),
            Self::Markdown => Ok(self.format_markdown(query, limited_rows)),
            Self::Csv => Ok(self.format_csv(limited_rows)),
            Self::Cards => {
                let response = cards::build_query_response(limited_rows)?;
                Ok(serde_json::to_string_pretty(&response)?)
            }
        }
    }

    /// Print search rows to stdout
    pub fn print_rows(&self, query: &str, rows: &[SearchResultRow], limit: usize) -> Result<(), anyhow::Error> {
        println!("{}", self.render_rows(query, rows, limit)?);
        Ok(())
    }

    fn format_cli(&self, rows: &[SearchResultRow]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Found {} packages:", rows.len());
        let _ = writeln!(out, "{:<40} {:<16} Description", "Package", "Version");
        let _ = writeln!(out, "{}", "-".repeat(100));

        for row in rows {
            let _ = writeln!(out, "{:<40} {:<16} {}", row.name, row.version, first_line(&row.description));
        }
        out.trim_end().to_string()
    }

    fn format_json(&self, query: &str, rows: &[SearchResultRow]) -> Result<String, anyhow::Error> {
        #[derive(Serialize)]
        struct JsonResult<'a> {
            query: &'a str,
            total: usize,
            results: &'a [SearchResultRow],
        }

        let output = JsonResult {
            query,
            total: rows.len(),
            results: rows,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_markdown(&self, query: &str, rows: &[SearchResultRow]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Packages matching `{}`", query);
        let _ = writeln!(out);
        let _ = writeln!(out, "Found {} packages:", rows.len());

        for (i, row) in rows.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## {}. {} {}", i + 1, row.name, row.version);
            let _ = writeln!(out, "{}", row.description);
            if !row.project_url.is_empty() {
                let _ = writeln!(out, "- **Project**: {}", row.project_url);
            }
        }
        out.trim_end().to_string()
    }

    fn format_csv(&self, rows: &[SearchResultRow]) -> String {
        let mut out = String::from("name,version,project_url,icon_url,description");
        for row in rows {
            let _ = write!(
                out,
                "\n{},{},{},{},{}",
                escape_csv(&row.name),
                escape_csv(&row.version),
                escape_csv(&row.project_url),
                escape_csv(&row.icon_url),
                escape_csv(&row.description)
            );
        }
        out
    }
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

/// Quote a CSV field when it contains separators, quotes or newlines
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
