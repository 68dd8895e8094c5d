//! Markdown report rendering: styled HTML always, PDF when `wkhtmltopdf`
//! is available on the host.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use pulldown_cmark::{html, Options, Parser};
use tracing::{info, warn};

/// Stylesheet applied to the rendered report.
const REPORT_CSS: &str = r#"
body {
    font-family: Arial, sans-serif;
    line-height: 1.6;
    margin: 40px;
    color: #333;
}
h1 {
    color: #2c3e50;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
}
h2 {
    color: #34495e;
    border-bottom: 1px solid #bdc3c7;
    padding-bottom: 5px;
}
h3 {
    color: #7f8c8d;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 20px 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 12px;
    text-align: left;
}
th {
    background-color: #f2f2f2;
    font-weight: bold;
}
code {
    background-color: #f4f4f4;
    padding: 2px 4px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
}
pre {
    background-color: #f8f8f8;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
}
blockquote {
    border-left: 4px solid #3498db;
    margin: 0;
    padding-left: 20px;
    font-style: italic;
}
"#;

/// Page layout handed to `wkhtmltopdf`.
const WKHTMLTOPDF_ARGS: &[&str] = &[
    "--page-size",
    "A4",
    "--margin-top",
    "0.75in",
    "--margin-right",
    "0.75in",
    "--margin-bottom",
    "0.75in",
    "--margin-left",
    "0.75in",
    "--encoding",
    "UTF-8",
    "--no-outline",
    "--enable-local-file-access",
    "--quiet",
];

/// Outcome of a render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// PDF written at the path.
    Pdf(PathBuf),
    /// Converter unavailable or failed; styled HTML written instead.
    HtmlFallback(PathBuf),
}

/// Convert markdown (tables enabled) to a standalone styled HTML document.
pub fn markdown_to_html(markdown: &str, title: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut body = String::new();
    html::push_html(&mut body, parser);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n<style>{REPORT_CSS}</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n"
    )
}

/// Render the markdown file at `input` to a PDF at `output`.
///
/// When `wkhtmltopdf` is missing or fails, the styled HTML is written next to
/// `output` (same stem, `.html` extension) and the outcome reports the
/// fallback.
pub fn render(input: &Path, output: &Path) -> Result<RenderOutcome> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let title = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("report");
    let html = markdown_to_html(&markdown, title);

    match pdf_from_html(&html, output) {
        Ok(()) => {
            info!(output = %output.display(), "PDF written");
            Ok(RenderOutcome::Pdf(output.to_path_buf()))
        }
        Err(err) => {
            let fallback = output.with_extension("html");
            warn!(error = %err, fallback = %fallback.display(), "PDF conversion unavailable, writing HTML instead");
            fs::write(&fallback, &html)
                .with_context(|| format!("failed to write {}", fallback.display()))?;
            Ok(RenderOutcome::HtmlFallback(fallback))
        }
    }
}

/// Stream HTML to `wkhtmltopdf` over stdin.
fn pdf_from_html(html: &str, output: &Path) -> Result<()> {
    let mut child = Command::new("wkhtmltopdf")
        .args(WKHTMLTOPDF_ARGS)
        .arg("-")
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to launch wkhtmltopdf")?;

    let mut stdin = child
        .stdin
        .take()
        .context("wkhtmltopdf stdin unavailable")?;
    stdin
        .write_all(html.as_bytes())
        .context("failed to stream HTML to wkhtmltopdf")?;
    drop(stdin);

    let status = child.wait().context("wkhtmltopdf did not exit")?;
    if !status.success() {
        bail!("wkhtmltopdf exited with {status}");
    }
    Ok(())
}
