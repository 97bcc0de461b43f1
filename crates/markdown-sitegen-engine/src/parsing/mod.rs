pub mod blocks;
pub mod inline;

pub use blocks::{Block, BlockType, classify_block, parse_blocks, segment_blocks};
pub use inline::{InlineSpan, ParseError, SpanKind, parse_inline};
