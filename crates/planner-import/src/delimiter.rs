//! Delimiter detection over the full pasted text.

use std::fmt;

/// Field delimiter of one pasted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Semicolon,
    Comma,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Comma => "comma",
        };
        f.write_str(name)
    }
}

/// Pick the delimiter for the whole paste. Checked in order, first match
/// wins; comma is the default even when no comma is present.
pub fn detect_delimiter(text: &str) -> Delimiter {
    if text.contains('\t') {
        Delimiter::Tab
    } else if text.contains(';') && !text.contains(',') {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
