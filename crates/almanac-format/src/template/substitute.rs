//! Placeholder substitution and fragment splitting.
//!
//! One left-to-right scan over the original template does both jobs.
//! Every token is matched against template text only, so a substituted
//! value can never be re-substituted, and the start/end boundary comes
//! from the token's position in the template rather than from searching
//! the substituted output. A start-side value that happens to contain
//! the literal text `$End` therefore cannot produce a false split.

use crate::components::CalendarComponents;

use super::{END_TOKEN_PREFIX, token_pairs};

/// A substituted template split at the first end-side token.
///
/// `start + end` reassembles the full substituted string exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRange {
    /// Everything before the first `$End*` token's value.
    pub start: String,
    /// The first `$End*` token's value and everything after it; empty
    /// when the template has no end-side token.
    pub end: String,
}

impl FormattedRange {
    /// The full substituted string.
    #[must_use]
    pub fn full(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

/// Substitutes all recognized tokens and splits at the first end-side
/// token.
///
/// Unrecognized `$` text passes through untouched. Tokens absent from
/// the template are simply unused.
#[must_use]
pub fn substitute(
    template: &str,
    start: &CalendarComponents,
    end: &CalendarComponents,
) -> FormattedRange {
    let pairs = token_pairs(start, end);

    let mut out = String::with_capacity(template.len());
    let mut boundary: Option<usize> = None;
    let mut rest = template;

    'scan: while !rest.is_empty() {
        if rest.starts_with('$') {
            for (token, value) in &pairs {
                if let Some(tail) = rest.strip_prefix(token) {
                    if boundary.is_none() && token.starts_with(END_TOKEN_PREFIX) {
                        boundary = Some(out.len());
                    }
                    out.push_str(value);
                    rest = tail;
                    continue 'scan;
                }
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    match boundary {
        Some(at) => {
            let end_fragment = out.split_off(at);
            FormattedRange {
                start: out,
                end: end_fragment,
            }
        }
        None => FormattedRange {
            start: out,
            end: String::new(),
        },
    }
}
