//! Line classification.
//!
//! Sorts each line of a route file into route declarations, ignorable lines
//! (blank or comment) and malformed lines.

use crate::models::Finding;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_ROUTE: Regex = Regex::new(r"^push route\s(.*)$").expect("Invalid Regex?");
    static ref RE_IGNORE: Regex = Regex::new(r"^\s*(#.*)?$").expect("Invalid Regex?");
}

/// One line of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLine<'a> {
    /// 1-based line number.
    pub line_nr: usize,
    /// Line text without its line terminator.
    pub text: &'a str,
}

/// Outcome of classifying a [`RouteLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `push route <expr>`, holds the expression as written.
    Route(&'a str),
    /// Blank line or comment.
    Ignored,
    /// Anything else.
    Malformed(Finding),
}

/// Split `content` into numbered lines, `\n` and `\r\n` endings are stripped.
pub fn route_lines(content: &str) -> impl Iterator<Item = RouteLine<'_>> {
    content.lines().enumerate().map(|(i, text)| RouteLine {
        line_nr: i + 1,
        text,
    })
}

/// Classify a single line.
pub fn classify_line<'a>(line: &RouteLine<'a>) -> LineClass<'a> {
    if let Some(caps) = RE_ROUTE.captures(line.text) {
        let expr = caps.get(1).map_or("", |m| m.as_str());
        return LineClass::Route(expr);
    }
    if RE_IGNORE.is_match(line.text) {
        return LineClass::Ignored;
    }
    log::trace!("Malformed line {}: {:?}", line.line_nr, line.text);
    LineClass::Malformed(Finding::Format {
        line: line.text.to_string(),
        line_nr: line.line_nr,
    })
}
