//! Cross-linking of definitions against the known term set

use crate::charset::CharacterSet;
use crate::glossary::Glossary;
use crate::tokenizer::tokenize;

/// Separators that never form part of a link label
pub const DEFAULT_LINK_SEPARATORS: &str = " \t,";

/// Renders definitions as HTML, linking every token that names a term
#[derive(Debug, Clone)]
pub struct CrossLinker {
    separators: CharacterSet,
}

impl Default for CrossLinker {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossLinker {
    pub fn new() -> Self {
        Self {
            separators: CharacterSet::build(DEFAULT_LINK_SEPARATORS),
        }
    }

    pub fn with_separators(mut self, separators: &str) -> Self {
        self.separators = CharacterSet::build(separators);
        self
    }

    /// Render `definition`, wrapping every token that exactly matches a term
    /// of `glossary` in an anchor to that term's page.
    ///
    /// Separator runs and unmatched words are copied verbatim, so stripping
    /// the anchors gives back `definition`.
    pub fn render_definition(&self, definition: &str, glossary: &Glossary) -> String {
        let mut html = String::with_capacity(definition.len());

        for (_, token) in tokenize(definition, &self.separators) {
            if glossary.contains(token) {
                html.push_str(&term_link(token));
            } else {
                html.push_str(token);
            }
        }

        html
    }
}

/// Anchor pointing at a term's page
pub fn term_link(term: &str) -> String {
    format!("<a href=\"{}.html\">{}</a>", term, term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_glossary() -> Glossary {
        [
            ("glossary", "a list of terms"),
            ("term", "a word in a glossary"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_known_term_is_linked() {
        let glossary = sample_glossary();
        let html = CrossLinker::new().render_definition("a word in a glossary", &glossary);
        assert_eq!(html, "a word in a <a href=\"glossary.html\">glossary</a>");
    }

    #[test]
    fn test_no_terms_leaves_text_verbatim() {
        let glossary = sample_glossary();
        let definition = "a list of difficult, specialized  words";
        assert_eq!(
            CrossLinker::new().render_definition(definition, &glossary),
            definition
        );
    }

    #[test]
    fn test_self_reference_is_linked() {
        let glossary: Glossary = [("loop", "see loop")].into_iter().collect();
        assert_eq!(
            CrossLinker::new().render_definition("see loop", &glossary),
            "see <a href=\"loop.html\">loop</a>"
        );
    }

    #[test]
    fn test_separators_are_not_part_of_link() {
        let glossary = sample_glossary();
        let html = CrossLinker::new().render_definition("term,glossary,\tterm", &glossary);
        assert_eq!(
            html,
            "<a href=\"term.html\">term</a>,<a href=\"glossary.html\">glossary</a>,\t<a href=\"term.html\">term</a>"
        );
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let glossary = sample_glossary();
        let html = CrossLinker::new()
            .render_definition("Glossary glossary. glossaries terms", &glossary);
        assert_eq!(html, "Glossary glossary. glossaries terms");
    }

    #[test]
    fn test_custom_separators() {
        let glossary = sample_glossary();
        let html = CrossLinker::new()
            .with_separators(" .")
            .render_definition("see glossary.", &glossary);
        assert_eq!(html, "see <a href=\"glossary.html\">glossary</a>.");
    }

    #[test]
    fn test_removing_links_restores_definition() {
        let glossary = sample_glossary();
        let definition = "a term, in a glossary,  is a term";
        let html = CrossLinker::new().render_definition(definition, &glossary);
        let stripped = html
            .replace("<a href=\"term.html\">term</a>", "term")
            .replace("<a href=\"glossary.html\">glossary</a>", "glossary");
        assert_eq!(stripped, definition);
    }
}
