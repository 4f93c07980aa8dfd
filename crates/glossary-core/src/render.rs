//! HTML documents for the glossary index and term pages

use crate::glossary::Glossary;
use crate::linker::{term_link, CrossLinker};

pub const INDEX_FILE_NAME: &str = "index.html";

/// Fills the index and term page templates
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    linker: CrossLinker,
}

impl PageRenderer {
    pub fn new(linker: CrossLinker) -> Self {
        Self { linker }
    }

    /// Index page listing `terms` in the given order
    pub fn index_page(&self, terms: &[&str]) -> String {
        let mut html = String::from(
            "<html><head><title>Glossary</title></head><body>\
             <h1>Glossary</h1><hr><h2><b>Index</b></h2><ul>",
        );
        for term in terms {
            html.push_str("<li>");
            html.push_str(&term_link(term));
            html.push_str("</li>");
        }
        html.push_str("</ul></body></html>");
        html
    }

    /// Page for `term`, with `definition` cross-linked against `glossary`
    pub fn term_page(&self, term: &str, definition: &str, glossary: &Glossary) -> String {
        let body = self.linker.render_definition(definition, glossary);

        format!(
            "<html><head><title>{term}</title></head><body>\
             <h1><i style=\"color:red;\">{term}</i></h1><p>{body}</p><hr>\
             <p>Return to <a href=\"index.html\">index</a>.</p></body></html>",
            term = term,
            body = body
        )
    }
}

/// File name of a term's page
pub fn page_file_name(term: &str) -> String {
    format!("{}.html", term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_structure() {
        let html = PageRenderer::default().index_page(&["meaning", "term"]);
        assert_eq!(
            html,
            "<html><head><title>Glossary</title></head><body><h1>Glossary</h1><hr>\
             <h2><b>Index</b></h2><ul><li><a href=\"meaning.html\">meaning</a></li>\
             <li><a href=\"term.html\">term</a></li></ul></body></html>"
        );
    }

    #[test]
    fn test_index_single_entry() {
        let html = PageRenderer::default().index_page(&["meaning"]);
        assert_eq!(html.matches("<li>").count(), 1);
        assert_eq!(html.matches("href=\"meaning.html\"").count(), 1);
    }

    #[test]
    fn test_index_without_terms() {
        let html = PageRenderer::default().index_page(&[]);
        assert!(html.ends_with("<ul></ul></body></html>"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_term_page_structure() {
        let glossary: Glossary = [
            ("glossary", "a list of terms"),
            ("term", "a word in a glossary"),
        ]
        .into_iter()
        .collect();

        let html = PageRenderer::default().term_page("term", "a word in a glossary", &glossary);
        assert_eq!(
            html,
            "<html><head><title>term</title></head><body>\
             <h1><i style=\"color:red;\">term</i></h1>\
             <p>a word in a <a href=\"glossary.html\">glossary</a></p><hr>\
             <p>Return to <a href=\"index.html\">index</a>.</p></body></html>"
        );
    }

    #[test]
    fn test_term_page_without_known_terms() {
        let html = PageRenderer::default().term_page("solo", "stands alone", &Glossary::new());
        assert!(html.contains("<p>stands alone</p>"));
    }

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name("meaning"), "meaning.html");
    }
}
