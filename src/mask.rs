//! File name masks deciding which files are route handlers
//!
//! A mask answers two questions about a file's base name: does it match, and
//! which part of the name produced the match. The second answer is the
//! "footprint" the route mapper strips before turning the rest of the name
//! into a route path.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use glob::{MatchOptions, Pattern};
use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// Pattern source of the default mask: names ending in `.route.js` or `.routes.js`.
pub const DEFAULT_PATTERN: &str = r"\.routes?\.js$";

static DEFAULT_MASK: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(DEFAULT_PATTERN).expect("DEFAULT_PATTERN regex is invalid"));

/// Predicate over file base names.
///
/// `Display` renders the mask for diagnostics and log output.
pub trait FileNameMask: fmt::Display + Send + Sync {
    /// Byte range of `name` that matched, or `None` if the name does not match.
    fn find(&self, name: &str) -> Option<Range<usize>>;

    fn is_match(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

impl FileNameMask for Regex {
    fn find(&self, name: &str) -> Option<Range<usize>> {
        Regex::find(self, name).map(|m| m.range())
    }

    fn is_match(&self, name: &str) -> bool {
        Regex::is_match(self, name)
    }
}

/// The mask a fresh [`RouteFinder`](crate::RouteFinder) starts with.
pub fn default_mask() -> Regex {
    DEFAULT_MASK.clone()
}

/// Compile a regex pattern into a case-insensitive mask.
pub fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::InvalidFileNamePattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Shell-style mask such as `*.miss.js`, matched case-insensitively.
///
/// The footprint is whatever the part of the pattern after its last `*`
/// matched, so `*.miss.js` strips `.miss.js` from `rm01.miss.js` and
/// `*.route.[jt]s` strips `.route.ts` from `users.route.ts`. A pattern
/// without `*` claims the whole name.
#[derive(Debug, Clone)]
pub struct GlobMask {
    pattern: Pattern,
    tail: Regex,
}

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl GlobMask {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let compiled = Pattern::new(pattern).map_err(|source| ConfigError::InvalidGlobPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            tail: compile_pattern(&tail_regex(pattern))?,
        })
    }
}

impl fmt::Display for GlobMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern.as_str())
    }
}

impl FileNameMask for GlobMask {
    fn find(&self, name: &str) -> Option<Range<usize>> {
        if !self.pattern.matches_with(name, GLOB_OPTIONS) {
            return None;
        }
        let end = name.len();
        Some(self.tail.find(name).map_or(end..end, |m| m.range()))
    }
}

/// Regex source for the part of a glob after its last `*`, anchored at the end.
///
/// That part contains no `*`, so it always spans a fixed number of characters
/// and can match at only one position.
fn tail_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tail = String::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                tail.clear();
                i += 1;
            }
            '?' => {
                tail.push('.');
                i += 1;
            }
            '[' => match class_end(&chars, i) {
                Some(close) => {
                    tail.push_str(&class_regex(&chars[i + 1..close]));
                    i = close + 1;
                }
                None => {
                    tail.push_str(r"\[");
                    i += 1;
                }
            },
            c => {
                tail.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                i += 1;
            }
        }
    }
    format!("(?:{})$", tail)
}

/// Index of the `]` closing the class opened at `open`.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if chars.get(i) == Some(&'!') {
        i += 1;
    }
    // `]` directly after the opening bracket is a member
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    (i..chars.len()).find(|&j| chars[j] == ']')
}

/// Translate a glob class body (`!a-z`, `.`, `jt`) into a regex class.
fn class_regex(body: &[char]) -> String {
    let (negated, members) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };
    let mut out = String::from(if negated { "[^" } else { "[" });
    for (idx, &c) in members.iter().enumerate() {
        if c == '-' && idx > 0 && idx + 1 < members.len() {
            out.push('-');
        } else {
            out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    out.push(']');
    out
}
