//! Word capitalization.
//!
//! Words are split on `' '` only, and empty words between consecutive
//! spaces are kept so the spacing of the input survives.

use crate::join::join;
use tk_core::CaseLocale;

/// Uppercase the first character of every word, leaving the rest alone.
///
/// `"This is a STRING!"` becomes `"This Is A STRING!"`.
pub fn capitalize(text: &str) -> String {
    capitalize_with(text, CaseLocale::English)
}

/// [`capitalize`] with an explicit case locale.
pub fn capitalize_with(text: &str, locale: CaseLocale) -> String {
    map_words(text, |word| capitalize_word(word, locale, |rest| rest.to_string()))
}

/// Uppercase the first character of every word and lowercase the rest.
///
/// `"This is a STRING!"` becomes `"This Is A String!"`.
pub fn capitalize_fully(text: &str) -> String {
    capitalize_fully_with(text, CaseLocale::English)
}

/// [`capitalize_fully`] with an explicit case locale.
pub fn capitalize_fully_with(text: &str, locale: CaseLocale) -> String {
    map_words(text, |word| capitalize_word(word, locale, |rest| locale.to_lower(rest)))
}

fn map_words<F>(text: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    join(' ', text.split(' ').map(f))
}

fn capitalize_word<R>(word: &str, locale: CaseLocale, rest: R) -> String
where
    R: Fn(&str) -> String,
{
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    locale.push_upper(&mut out, first);
    out.push_str(&rest(chars.as_str()));
    out
}
