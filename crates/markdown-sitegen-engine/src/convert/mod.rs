//! # Document Assembly
//!
//! Turns a markdown document into an HTML [`Node`] tree.
//!
//! ## Pipeline
//!
//! 1. `parsing::blocks` segments and classifies the document
//! 2. each block's text is normalized according to its type (`block`)
//! 3. normalized text is split into inline spans (`parsing::inline`)
//! 4. every span becomes a leaf node (`span`)
//! 5. leaves are wrapped in the block's container, and all blocks in one
//!    root `div`
//!
//! Errors abort the whole document: there is no partial output.

pub mod block;
pub mod span;
pub mod title;

use thiserror::Error;

use crate::{
    html::Node,
    parsing::{
        ParseError,
        blocks::{normalize_newlines, parse_blocks},
    },
};

pub use block::block_to_node;
pub use span::span_to_node;
pub use title::extract_title;

/// Tag of the root container holding every block.
pub const ROOT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] ParseError),

    #[error("No title found: the document has no `# ` heading")]
    NoTitleFound,
}

/// Converts a markdown document into a `div` containing one node per block.
pub fn convert(document: &str) -> Result<Node, ConvertError> {
    let document = normalize_newlines(document);
    let blocks = parse_blocks(&document);
    log::debug!("Converting {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::container(ROOT_TAG, children))
}

/// Converts a markdown document straight to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, ConvertError> {
    Ok(convert(document)?.serialize())
}
