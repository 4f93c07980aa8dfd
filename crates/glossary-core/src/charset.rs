use std::collections::HashSet;

/// Class of a single character relative to a separator set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Separator,
    Word,
}

/// Set of distinct characters, used to classify separators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    chars: HashSet<char>,
}

impl CharacterSet {
    /// Build the set of distinct characters appearing in `text`
    pub fn build(text: &str) -> Self {
        text.chars().collect()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn classify(&self, c: char) -> CharClass {
        if self.contains(c) {
            CharClass::Separator
        } else {
            CharClass::Word
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
