//! # Site Generation
//!
//! Everything around the conversion core that turns a content directory into
//! a deployable site.
//!
//! ## Modules
//!
//! - **`template`**: `Template` with `{{ Title }}` / `{{ Content }}` placeholders
//! - **`base_path`**: rewriting root-relative URLs for a deployment prefix
//! - **`generate`**: per-page and whole-site generation

pub mod base_path;
pub mod generate;
pub mod template;

use std::path::PathBuf;

use thiserror::Error;

use crate::{convert::ConvertError, io::IoError};

pub use base_path::{rebase_node, rewrite_base_path};
pub use generate::{build_site, generate_page, generate_pages_recursive};
pub use template::Template;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },

    #[error("{0} is not inside the content directory")]
    OutsideContentDir(PathBuf),
}

/// Inputs and outputs of a full site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Markdown sources.
    pub content_dir: PathBuf,
    /// Assets copied verbatim to the output.
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    /// Recreated on every build.
    pub output_dir: PathBuf,
    /// URL prefix the site is served under.
    pub base_path: String,
}
