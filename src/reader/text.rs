//! Default line-oriented `key = value` format.
//!
//! ```text
//! # comment
//! Mailbox.Notification = You have {0} new messages
//! Multiline = Line One\nLine Two\nLine Three
//! ```
//!
//! Lines starting with `#` or `;` are comments. Keys and values are trimmed.
//! Inside a value `\n` becomes [`LINE_SEPARATOR`], `\r` a carriage return,
//! `\t` a tab, `\s` a space, `\u{a0}` the character with that hex code and
//! `\\` a literal backslash. Any other escape is kept as written.

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};

use super::LocaleReader;
use crate::error::ReaderError;
use crate::store::TranslationMap;

/// Platform line separator substituted for the `\n` escape.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Platform line separator substituted for the `\n` escape.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Reader for the default text format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReader;

impl LocaleReader for TextReader {
    fn name(&self) -> &str {
        "text"
    }

    fn parse(&self, stream: &mut dyn Read) -> Result<Option<TranslationMap>, ReaderError> {
        let mut map = TranslationMap::new();

        for (index, line) in BufReader::new(stream).lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let trimmed = line.trim_start_matches('\u{feff}').trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("line {number}: expected `key = value`").into());
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("line {number}: empty key").into());
            }
            if map.contains_key(key) {
                return Err(format!("line {number}: duplicate key '{key}'").into());
            }
            map.insert(key.to_string(), unescape(value.trim()));
        }

        Ok(Some(map))
    }
}

/// Render `entries` in the text format, sorted by key.
///
/// Line breaks, backslashes and whitespace at either end of a value are
/// escaped so that parsing the output yields the same map.
pub fn write_entries(entries: &TranslationMap) -> String {
    let sorted: BTreeMap<_, _> = entries.iter().collect();
    let mut out = String::new();
    for (key, value) in sorted {
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(&escape(value));
        out.push('\n');
    }
    out
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push_str(LINE_SEPARATOR),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some('u') => {
                let rest = chars.as_str();
                if let Some(body) = rest.strip_prefix('{')
                    && let Some(close) = body.find('}')
                    && let Some(c) =
                        u32::from_str_radix(&body[..close], 16).ok().and_then(char::from_u32)
                {
                    out.push(c);
                    chars = body[close + 1..].chars();
                } else {
                    out.push_str("\\u");
                }
            },
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }
    out
}

fn escape(value: &str) -> String {
    // Parsing trims the value, so whitespace outside [start, end) is escaped.
    let start = value.len() - value.trim_start().len();
    let end = value.trim_end().len().max(start);

    let mut out = String::with_capacity(value.len());
    let mut chars = value.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        let edge = index < start || index >= end;
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' if LINE_SEPARATOR == "\r\n"
                && chars.peek().is_some_and(|&(_, next)| next == '\n') =>
            {
                chars.next();
                out.push_str("\\n");
            },
            '\r' => out.push_str("\\r"),
            '\t' if edge => out.push_str("\\t"),
            ' ' if edge => out.push_str("\\s"),
            c if edge && c.is_whitespace() => out.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}
