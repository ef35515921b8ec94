use crate::Ptr;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

/// The string type used for boundary values
///
/// The string data is immutable and shared between clones. Lengths and indices follow the
/// host convention of counting UTF-16 code units rather than bytes or chars.
#[derive(Clone)]
pub struct JsString(Ptr<str>);

impl JsString {
    /// Returns the empty string
    pub fn empty() -> Self {
        EMPTY_STRING.with(|s| s.clone())
    }

    /// Returns the `&str` backing the string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of UTF-16 code units in the string
    pub fn len_utf16(&self) -> usize {
        self.0.chars().map(char::len_utf16).sum()
    }

    /// Returns the character at the given UTF-16 index as a new string
    ///
    /// Indices that land in the middle of a surrogate pair produce U+FFFD, lone surrogates
    /// can't be represented in a `str`.
    pub fn char_at_utf16(&self, index: usize) -> Option<Self> {
        let mut position = 0;
        for c in self.0.chars() {
            let width = c.len_utf16();
            if index == position {
                return Some(c.to_string().into());
            }
            if index < position + width {
                return Some(char::REPLACEMENT_CHARACTER.to_string().into());
            }
            position += width;
        }
        None
    }

    /// Compares two strings by their UTF-16 code units
    ///
    /// This differs from `str`'s ordering for characters outside of the basic multilingual
    /// plane.
    pub fn cmp_utf16(&self, other: &Self) -> Ordering {
        self.0.encode_utf16().cmp(other.0.encode_utf16())
    }
}

thread_local! {
    static EMPTY_STRING: JsString = JsString(Ptr::from(""));
}

impl Default for JsString {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for JsString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for JsString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for JsString {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for JsString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Eq for JsString {}

impl Hash for JsString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(JsString::from("abc").len_utf16(), 3);
        assert_eq!(JsString::from("é").len_utf16(), 1);
        assert_eq!(JsString::from("😀").len_utf16(), 2);
        assert_eq!(JsString::empty().len_utf16(), 0);
    }

    #[test]
    fn char_at_utf16() {
        let s = JsString::from("a😀b");
        assert_eq!(s.char_at_utf16(0).unwrap(), "a");
        assert_eq!(s.char_at_utf16(1).unwrap(), "😀");
        assert_eq!(s.char_at_utf16(2).unwrap(), "\u{fffd}");
        assert_eq!(s.char_at_utf16(3).unwrap(), "b");
        assert!(s.char_at_utf16(4).is_none());
    }

    #[test]
    fn utf16_ordering() {
        let a = JsString::from("a");
        let abc = JsString::from("abc");
        assert_eq!(a.cmp_utf16(&abc), Ordering::Less);
        assert_eq!(abc.cmp_utf16(&abc.clone()), Ordering::Equal);
        // U+FF61 comes before U+1F600 by code point, but after its leading surrogate
        // when comparing UTF-16 code units.
        let halfwidth = JsString::from("\u{ff61}");
        let emoji = JsString::from("😀");
        assert_eq!(halfwidth.cmp_utf16(&emoji), Ordering::Greater);
    }
}
