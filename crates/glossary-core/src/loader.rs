//! Parser for the line-oriented glossary text format
//!
//! A glossary file is a sequence of records: a term line, one or more
//! definition lines, then a blank line before the next record. Only the
//! leading field of each line is kept, that is the text before the first
//! field separator (a tab by default). Terms may not contain any of the
//! separators used for cross-linking.

use crate::charset::{CharClass, CharacterSet};
use crate::errors::GlossaryError;
use crate::glossary::Glossary;
use crate::linker::DEFAULT_LINK_SEPARATORS;
use crate::tokenizer::next_token;
use std::path::Path;

/// Default field separators for glossary input lines
pub const DEFAULT_FIELD_SEPARATORS: &str = "\t";

#[derive(Debug)]
enum State {
    ExpectTerm,
    ExpectDefinitionOrBlank {
        term: String,
        term_line: usize,
        lines: Vec<String>,
    },
}

/// Loads glossary records from text
#[derive(Debug, Clone)]
pub struct GlossaryLoader {
    field_separators: CharacterSet,
    term_separators: CharacterSet,
}

impl Default for GlossaryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GlossaryLoader {
    pub fn new() -> Self {
        Self {
            field_separators: CharacterSet::build(DEFAULT_FIELD_SEPARATORS),
            term_separators: CharacterSet::build(DEFAULT_LINK_SEPARATORS),
        }
    }

    pub fn with_field_separators(mut self, separators: &str) -> Self {
        self.field_separators = CharacterSet::build(separators);
        self
    }

    /// Characters a term may not contain, normally the cross-linking separators
    pub fn with_term_separators(mut self, separators: &str) -> Self {
        self.term_separators = CharacterSet::build(separators);
        self
    }

    /// Load a glossary from a text file
    pub fn from_file<P: AsRef<Path>>(&self, path: P) -> Result<Glossary, GlossaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GlossaryError::IoError(format!(
                "Failed to read glossary file {}: {}",
                path.display(),
                e
            ))
        })?;

        let glossary = self.from_str(&content)?;
        log::info!(
            "Loaded {} glossary terms from {}",
            glossary.len(),
            path.display()
        );
        Ok(glossary)
    }

    /// Load a glossary from its text content
    pub fn from_str(&self, content: &str) -> Result<Glossary, GlossaryError> {
        let mut glossary = Glossary::new();
        let mut state = State::ExpectTerm;

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let blank = line.is_empty();

            state = match state {
                State::ExpectTerm if blank => {
                    log::debug!("Skipping extra blank line {}", line_number);
                    State::ExpectTerm
                }
                State::ExpectTerm => {
                    let term = self.leading_field(line);
                    if self.field_separators.classify(first_char(term)) == CharClass::Separator {
                        return Err(GlossaryError::malformed(
                            line_number,
                            "term line starts with a field separator",
                        ));
                    }
                    if term.chars().any(|c| self.term_separators.contains(c)) {
                        return Err(GlossaryError::malformed(
                            line_number,
                            format!("term '{}' contains a separator character", term),
                        ));
                    }
                    State::ExpectDefinitionOrBlank {
                        term: term.to_string(),
                        term_line: line_number,
                        lines: Vec::new(),
                    }
                }
                State::ExpectDefinitionOrBlank {
                    term,
                    term_line,
                    lines,
                } if blank => {
                    Self::finish_record(&mut glossary, term, term_line, lines)?;
                    State::ExpectTerm
                }
                State::ExpectDefinitionOrBlank {
                    term,
                    term_line,
                    mut lines,
                } => {
                    lines.push(self.leading_field(line).to_string());
                    State::ExpectDefinitionOrBlank {
                        term,
                        term_line,
                        lines,
                    }
                }
            };
        }

        if let State::ExpectDefinitionOrBlank {
            term,
            term_line,
            lines,
        } = state
        {
            Self::finish_record(&mut glossary, term, term_line, lines)?;
        }

        Ok(glossary)
    }

    fn leading_field<'a>(&self, line: &'a str) -> &'a str {
        next_token(line, 0, &self.field_separators)
    }

    fn finish_record(
        glossary: &mut Glossary,
        term: String,
        term_line: usize,
        lines: Vec<String>,
    ) -> Result<(), GlossaryError> {
        if lines.is_empty() {
            return Err(GlossaryError::malformed(
                term_line,
                format!("term '{}' has no definition", term),
            ));
        }

        let definition = lines.join(" ");
        if !glossary.contains(&term) {
            glossary.insert(term, definition);
            Ok(())
        } else {
            Err(GlossaryError::DuplicateTerm {
                term,
                line: term_line,
            })
        }
    }
}

fn first_char(text: &str) -> char {
    text.chars().next().unwrap_or_default()
}
