//! Extraction of a CP balance from free text.
//!
//! The parser holds an ordered list of patterns, each with one capture group for the number.
//! Evaluation policy:
//!
//! 1. Patterns are tried in list order; the first pattern with at least one match decides.
//! 2. Within that pattern, the last (rightmost) match wins.
//! 3. If its capture does not parse as a CP value, the scan continues with the next pattern.

use crate::error::PatternError;
use crate::Cp;
use regex::{Regex, RegexBuilder};

const LABEL_THEN_NUMBER: &str = r"(?:current\s+)?(?:choice\s+)?(?:points?|cp)(?:\s*:?\s*)(\d+)";
const NUMBER_THEN_LABEL: &str = r"(\d+)\s*(?:choice\s+)?(?:points?|cp)";
const CP_QUALIFIED: &str = r"cp\s*(?:total|current|available)?\s*:?\s*(\d+)";
const TOTAL_CP: &str = r"total\s*cp\s*:?\s*(\d+)";
const REMAINING_CP: &str = r"remaining\s*(?:cp|choice\s*points?)\s*:?\s*(\d+)";
const YOU_HAVE: &str = r"you\s+(?:now\s+)?have\s+(\d+)\s*(?:cp|choice\s*points?)";
const NUMBER_LEFT: &str = r"(\d+)\s*(?:cp|choice\s*points?)\s+(?:remaining|left|available)";

/// Patterns used by the tool server, in priority order.
pub const BUILTIN_PATTERNS: &[&str] = &[
    LABEL_THEN_NUMBER,
    NUMBER_THEN_LABEL,
    CP_QUALIFIED,
    TOTAL_CP,
    REMAINING_CP,
    YOU_HAVE,
    NUMBER_LEFT,
];

/// Default user-editable pattern list of the panel front end.
pub const PANEL_DEFAULT_PATTERNS: &[&str] = &[
    LABEL_THEN_NUMBER,
    NUMBER_THEN_LABEL,
    CP_QUALIFIED,
    TOTAL_CP,
    REMAINING_CP,
];

/// One compiled, case-insensitive CP pattern.
#[derive(Debug, Clone)]
pub struct CpPattern {
    source: String,
    regex: Regex,
}

impl CpPattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(&ascii_classes(source))
            .case_insensitive(true)
            .build()
            .map_err(|source_err| PatternError::Invalid {
                pattern: source.to_string(),
                source: source_err,
            })?;
        // captures_len counts the implicit whole-match group.
        if regex.captures_len() < 2 {
            return Err(PatternError::MissingCapture {
                pattern: source.to_string(),
            });
        }
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as written, before digit and word classes are narrowed to ASCII.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Capture group 1 of the rightmost match, if the pattern matches at all.
    fn last_capture<'t>(&self, text: &'t str) -> Option<Option<&'t str>> {
        self.regex
            .captures_iter(text)
            .last()
            .map(|caps| caps.get(1).map(|m| m.as_str()))
    }
}

/// Rewrite `\d`, `\D`, `\w` and `\W` to their ASCII-only classes. Balances are written with
/// ASCII digits; a Unicode digit run must not count as a match that then fails to parse.
///
/// Bracketed replacements stay valid inside a character class, where they nest.
fn ascii_classes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Ordered cascade of [`CpPattern`]s.
#[derive(Debug, Clone)]
pub struct CpParser {
    patterns: Vec<CpPattern>,
}

impl CpParser {
    pub fn builtin() -> Self {
        Self::from_patterns_lenient(BUILTIN_PATTERNS.iter().copied()).0
    }

    pub fn panel_defaults() -> Self {
        Self::from_patterns_lenient(PANEL_DEFAULT_PATTERNS.iter().copied()).0
    }

    /// Compile every pattern, failing on the first one that is unusable.
    pub fn try_from_patterns<I, S>(sources: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|source| CpPattern::new(source.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Compile what compiles, keep list order, and hand back the rejects.
    ///
    /// User-edited pattern lists go through here so one bad entry does not disable tracking.
    pub fn from_patterns_lenient<I, S>(sources: I) -> (Self, Vec<PatternError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        let mut rejected = Vec::new();
        for source in sources {
            match CpPattern::new(source.as_ref()) {
                Ok(pattern) => patterns.push(pattern),
                Err(err) => {
                    log::warn!("{err}");
                    rejected.push(err);
                }
            }
        }
        (Self { patterns }, rejected)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(CpPattern::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Extract a CP value from `text`, or `None` if no pattern yields one.
    pub fn parse(&self, text: &str) -> Option<Cp> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .last_capture(text)
                .flatten()
                .and_then(|digits| digits.parse::<Cp>().ok())
        })
    }
}

impl Default for CpParser {
    fn default() -> Self {
        Self::builtin()
    }
}
