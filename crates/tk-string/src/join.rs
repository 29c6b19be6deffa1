//! Joining words with a separator.

/// Something that can sit between joined words: a `char` or a string.
pub trait Separator {
    fn push_to(&self, out: &mut String);
}

impl Separator for char {
    fn push_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Separator for str {
    fn push_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Separator for String {
    fn push_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl<T: Separator + ?Sized> Separator for &T {
    fn push_to(&self, out: &mut String) {
        (**self).push_to(out);
    }
}

/// Join `words` with `separator` between each pair. No separator is added
/// before the first or after the last word; an empty input gives `""`.
pub fn join<S, I>(separator: S, words: I) -> String
where
    S: Separator,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut words = words.into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut out = String::from(first.as_ref());
    for word in words {
        separator.push_to(&mut out);
        out.push_str(word.as_ref());
    }
    out
}
