//! Core library for turning a flat glossary file into cross-linked HTML pages.
//!
//! The pipeline reads term/definition records, sorts the terms, and renders
//! one index page plus one page per term. Inside each definition, every token
//! that exactly names a known term becomes a link to that term's page.
//!
//! # Architecture Overview
//!
//! - **Character sets and tokenizer**: maximal separator/word runs over a text
//! - **Loader**: line-oriented record parser producing the [`Glossary`]
//! - **Cross-linker**: token-by-token definition rendering with term links
//! - **Renderer and site**: fixed HTML templates and output directory writes
//! - **Configuration system**: optional YAML configuration with defaults

pub mod charset;
pub mod config;
pub mod errors;
pub mod glossary;
pub mod linker;
pub mod loader;
pub mod render;
pub mod site;
pub mod tokenizer;

pub use charset::{CharClass, CharacterSet};
pub use config::{
    ConfigBuilder, ConfigLoader, GlossaryConfig, LinkingConfig, LoaderConfig, LoggingConfig,
    OutputConfig,
};
pub use errors::GlossaryError;
pub use glossary::Glossary;
pub use linker::CrossLinker;
pub use loader::GlossaryLoader;
pub use render::PageRenderer;
pub use site::{Page, Site};
pub use tokenizer::{next_token, tokenize};

use std::path::{Path, PathBuf};

/// Load `input`, render every page and write them into `output_dir`.
///
/// Returns the paths of the files written.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    config: &GlossaryConfig,
) -> Result<Vec<PathBuf>, GlossaryError> {
    let glossary = GlossaryLoader::new()
        .with_field_separators(&config.loader.field_separators)
        .with_term_separators(&config.linking.separators)
        .from_file(input)?;

    let renderer = PageRenderer::new(CrossLinker::new().with_separators(&config.linking.separators));
    let site = Site::build(&glossary, &renderer)?;

    site.write_to(output_dir, config.output.atomic_writes)
}
