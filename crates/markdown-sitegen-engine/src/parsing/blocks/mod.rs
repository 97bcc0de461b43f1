//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty blocks
//!
//! 2. **Classification** (`classify`): each block gets a `BlockType` from
//!    ordered first-match-wins rules
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`)
//! - **`kinds`**: Block-specific types owning their markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `segment_blocks` and `parse_blocks`
//! - **`classify`**: `classify_block`
//!
//! ## Key Invariants
//!
//! - Blocks are independent: no state is carried from one block to the next
//! - A code block's fences must both be inside the block, so fenced code
//!   containing a blank line is not recognized as code

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify_block;
pub use segment::{normalize_newlines, parse_blocks, segment_blocks};
pub use types::{Block, BlockType};
