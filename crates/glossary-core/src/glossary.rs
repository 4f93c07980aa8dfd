use std::collections::HashMap;

/// Terms and their definitions, as loaded from a glossary file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glossary {
    definitions: HashMap<String, String>,
    terms: Vec<String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term and its definition.
    ///
    /// Returns false and leaves the glossary untouched when the term is
    /// already present.
    pub fn insert(&mut self, term: impl Into<String>, definition: impl Into<String>) -> bool {
        let term = term.into();
        if self.definitions.contains_key(&term) {
            return false;
        }
        self.terms.push(term.clone());
        self.definitions.insert(term, definition.into());
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    /// Terms in the order they were loaded
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Term/definition pairs in lexicographic term order, the order of the
    /// index and of page output
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .definitions
            .iter()
            .map(|(term, definition)| (term.as_str(), definition.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Glossary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for (term, definition) in iter {
            glossary.insert(term, definition);
        }
        glossary
    }
}
