//! Splits text into maximal runs of separator or word characters
//!
//! A token is the longest run, starting at a given byte position, whose
//! characters all share one class relative to a [`CharacterSet`]. Tokens
//! partition the input: concatenating them in order yields the text back.

use crate::charset::{CharClass, CharacterSet};

/// Return the maximal token of `text` starting at byte offset `position`.
///
/// The class of the character at `position` fixes the class of the whole
/// token. Scanning stops at the end of `text` or at the first character of
/// the opposite class.
///
/// # Panics
///
/// Panics if `position` is not less than `text.len()` or does not fall on a
/// character boundary. Callers resume at the end of the previous token.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &CharacterSet) -> &'a str {
    assert!(
        position < text.len(),
        "token position {} out of bounds for text of length {}",
        position,
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "token position {} is not on a character boundary",
        position
    );

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let class = match chars.next() {
        Some((_, c)) => separators.classify(c),
        None => unreachable!("position checked against text length"),
    };

    let end = chars
        .find(|&(_, c)| separators.classify(c) != class)
        .map(|(offset, _)| offset)
        .unwrap_or(rest.len());

    &rest[..end]
}

/// Iterator over consecutive tokens of a text, paired with their class
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s CharacterSet,
}

impl<'a, 's> Tokens<'a, 's> {
    pub fn new(text: &'a str, separators: &'s CharacterSet) -> Self {
        Self {
            text,
            position: 0,
            separators,
        }
    }
}

impl<'a, 's> Iterator for Tokens<'a, 's> {
    type Item = (CharClass, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let token = next_token(self.text, self.position, self.separators);
        self.position += token.len();
        let class = token
            .chars()
            .next()
            .map(|c| self.separators.classify(c))
            .unwrap_or(CharClass::Word);
        Some((class, token))
    }
}

/// Tokenize the whole of `text`
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s CharacterSet) -> Tokens<'a, 's> {
    Tokens::new(text, separators)
}
