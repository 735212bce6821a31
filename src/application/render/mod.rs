//! HTML renderers for the two run artifacts.
//!
//! Pure functions over the record list plus an explicit generation timestamp,
//! so the same inputs always produce byte-identical documents.

pub mod dashboard;
pub mod email;

pub use dashboard::render_dashboard;
pub use email::render_email;

/// Escape untrusted text (feed titles, model output) before embedding it in
/// a document. Everything interpolated into either artifact goes through
/// this.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display format for the "generated at" stamp in both artifacts.
pub const DATE_FORMAT: &str = "%d-%m-%Y";
