//! Post-processing transforms applied to rendered source text.
//!
//! Templates are authored with tab indentation; `format_indentation`
//! rewrites the leading tabs into the configured style after
//! `format_code` has normalized whitespace.

use serde::{Deserialize, Serialize};

/// Indentation style for generated sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indent {
    /// Four spaces per level.
    #[default]
    #[serde(rename = "4")]
    Four,
    /// Two spaces per level.
    #[serde(rename = "2")]
    Two,
    /// One tab per level.
    #[serde(rename = "tab")]
    Tab,
}

impl Indent {
    fn unit(self) -> &'static str {
        match self {
            Indent::Four => "    ",
            Indent::Two => "  ",
            Indent::Tab => "\t",
        }
    }
}

/// Normalize whitespace in rendered source text: CRLF becomes LF, trailing
/// whitespace is stripped, blank-line runs collapse to a single blank line,
/// and non-empty output ends with exactly one newline.
pub fn format_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.replace("\r\n", "\n").lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run > 0 && !out.is_empty() {
            out.push('\n');
        }
        blank_run = 0;
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Rewrite leading tabs into the selected indentation style. Tabs past the
/// first non-tab character are left alone.
pub fn format_indentation(text: &str, indent: Indent) -> String {
    if indent == Indent::Tab {
        return text.to_string();
    }
    let unit = indent.unit();
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let stripped = line.trim_start_matches('\t');
        let tabs = line.len() - stripped.len();
        for _ in 0..tabs {
            out.push_str(unit);
        }
        out.push_str(stripped);
    }
    out
}
