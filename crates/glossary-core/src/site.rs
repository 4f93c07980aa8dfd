//! Rendering the full set of pages and writing them to an output directory
//!
//! All pages are rendered in memory before the first file is touched, so a
//! rendering problem never leaves a half-written directory behind. With atomic
//! writes enabled, every page goes to a temporary file inside the output
//! directory and is renamed over its final name.

use crate::errors::GlossaryError;
use crate::glossary::Glossary;
use crate::render::{page_file_name, PageRenderer, INDEX_FILE_NAME};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// One rendered output file
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub file_name: String,
    pub html: String,
}

/// Every page of a glossary site, index first, then terms in sorted order
#[derive(Debug, Clone, Default)]
pub struct Site {
    pages: Vec<Page>,
}

impl Site {
    /// Render the index and one page per term.
    ///
    /// Fails when a term's page would share the index page's file name.
    pub fn build(glossary: &Glossary, renderer: &PageRenderer) -> Result<Self, GlossaryError> {
        let entries = glossary.sorted_entries();
        let terms: Vec<&str> = entries.iter().map(|(term, _)| *term).collect();
        let mut pages = Vec::with_capacity(entries.len() + 1);

        pages.push(Page {
            file_name: INDEX_FILE_NAME.to_string(),
            html: renderer.index_page(&terms),
        });

        for (term, definition) in entries {
            let file_name = page_file_name(term);
            if file_name == INDEX_FILE_NAME {
                return Err(GlossaryError::ReservedTerm(term.to_string()));
            }
            pages.push(Page {
                file_name,
                html: renderer.term_page(term, definition, glossary),
            });
        }

        log::debug!("Rendered {} pages", pages.len());
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, file_name: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.file_name == file_name)
    }

    /// Write every page into `dir`, which must already exist.
    ///
    /// Returns the paths written, in page order.
    pub fn write_to<P: AsRef<Path>>(
        &self,
        dir: P,
        atomic: bool,
    ) -> Result<Vec<PathBuf>, GlossaryError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(GlossaryError::OutputDirectoryMissing(
                dir.display().to_string(),
            ));
        }

        log::info!(
            "Writing {} pages to {}{}",
            self.pages.len(),
            dir.display(),
            if atomic { " (atomic)" } else { "" }
        );

        let mut written = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let path = dir.join(&page.file_name);
            if atomic {
                write_atomic(dir, &path, page.html.as_bytes())?;
            } else {
                std::fs::write(&path, page.html.as_bytes()).map_err(|e| {
                    GlossaryError::IoError(format!("Failed to write {}: {}", path.display(), e))
                })?;
            }
            log::debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

fn write_atomic(dir: &Path, path: &Path, contents: &[u8]) -> Result<(), GlossaryError> {
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| {
        GlossaryError::IoError(format!(
            "Failed to create temporary file in {}: {}",
            dir.display(),
            e
        ))
    })?;
    staged.write_all(contents)?;
    staged.flush()?;
    staged.persist(path).map_err(|e| {
        GlossaryError::IoError(format!("Failed to move page into {}: {}", path.display(), e))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_glossary() -> Glossary {
        [
            ("term", "a word in a glossary"),
            ("glossary", "a list of terms"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_build_orders_pages() {
        let site = Site::build(&sample_glossary(), &PageRenderer::default()).unwrap();
        let names: Vec<&str> = site.pages().iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, vec!["index.html", "glossary.html", "term.html"]);
    }

    #[test]
    fn test_build_empty_glossary() {
        let site = Site::build(&Glossary::new(), &PageRenderer::default()).unwrap();
        assert_eq!(site.pages().len(), 1);
        assert!(site.page("index.html").is_some());
    }

    #[test]
    fn test_term_named_index_is_rejected() {
        let glossary: Glossary = [("index", "a list of entries"), ("word", "a unit of language")]
            .into_iter()
            .collect();

        let err = Site::build(&glossary, &PageRenderer::default()).unwrap_err();
        assert_eq!(err, GlossaryError::ReservedTerm("index".to_string()));
    }

    #[test]
    fn test_write_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        let site = Site::build(&sample_glossary(), &PageRenderer::default()).unwrap();

        for atomic in [true, false] {
            let written = site.write_to(temp_dir.path(), atomic).unwrap();
            assert_eq!(written.len(), 3);

            let term_html = std::fs::read_to_string(temp_dir.path().join("term.html")).unwrap();
            assert_eq!(term_html, site.page("term.html").unwrap().html);
        }

        let leftovers = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 3);
    }

    #[test]
    fn test_write_to_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let site = Site::build(&sample_glossary(), &PageRenderer::default()).unwrap();

        let err = site.write_to(&missing, true).unwrap_err();
        assert!(matches!(err, GlossaryError::OutputDirectoryMissing(_)));
    }
}
