//! Any-of predicates and case-insensitive comparisons.
//!
//! Each named predicate is [`any_match`] with a fixed relation. Candidates can
//! be any `IntoIterator`, so arrays, slices, `Vec`s and iterators all work.

use tk_core::case;

/// True if `relation(subject, candidate)` holds for at least one candidate.
/// Stops at the first match. No candidates means no match.
pub fn any_match<S, I, F>(subject: &S, candidates: I, relation: F) -> bool
where
    S: ?Sized,
    I: IntoIterator,
    F: Fn(&S, I::Item) -> bool,
{
    candidates.into_iter().any(|candidate| relation(subject, candidate))
}

/// `text` contains at least one candidate as a substring.
pub fn contains<I>(text: &str, candidates: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    any_match(text, candidates, |t, c| t.contains(c.as_ref()))
}

/// `text` is equal to at least one candidate.
pub fn equals_any<I>(text: &str, candidates: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    any_match(text, candidates, |t, c| t == c.as_ref())
}

/// `text` equals at least one candidate, ignoring case.
pub fn equals_any_ignore_case<I>(text: &str, candidates: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    any_match(text, candidates, |t, c| equals_ignore_case(t, c.as_ref()))
}

/// `text` starts with at least one of `prefixes`.
pub fn starts_with_any<I>(text: &str, prefixes: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    any_match(text, prefixes, |t, p| t.starts_with(p.as_ref()))
}

/// At least one of `texts` starts with `prefix`.
pub fn any_starts_with<I>(prefix: &str, texts: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    any_match(prefix, texts, |p, t| t.as_ref().starts_with(p))
}

/// Character-wise case-insensitive equality.
///
/// Two characters match if they are equal, equal after uppercasing, or their
/// uppercased forms are equal after lowercasing. Only simple single-character
/// mappings are used, so `ß` does not match `SS` but `İ` matches `i`.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_match_ignore_case(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_match_ignore_case(x: char, y: char) -> bool {
    if x == y {
        return true;
    }
    let (ux, uy) = (simple_upper(x), simple_upper(y));
    ux == uy || simple_lower(ux) == simple_lower(uy)
}

fn simple_upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn simple_lower(c: char) -> char {
    // Full mapping adds a combining dot; the simple mapping is plain `i`.
    if c == '\u{130}' {
        return 'i';
    }
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// `text` starts with `prefix` after lowercasing both with the English
/// mapping. An empty prefix always matches.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    case::to_lower(text).starts_with(&case::to_lower(prefix))
}

/// `None`, empty, and strings made only of ASCII control characters and
/// spaces (everything up to `' '`) are blank.
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |s| s.trim_matches(|c: char| c <= ' ').is_empty())
}

pub fn is_not_blank(text: Option<&str>) -> bool {
    !is_blank(text)
}
