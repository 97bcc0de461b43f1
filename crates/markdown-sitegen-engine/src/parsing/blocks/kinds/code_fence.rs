/// A fenced code block split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedCode<'a> {
    /// Text after the opening fence on the same line, trimmed (e.g. `rust`).
    pub info: &'a str,
    /// Everything between the opening fence line and the closing fence.
    pub content: &'a str,
}

impl FencedCode<'_> {
    /// First word of the info string, used as the code language.
    pub fn language(&self) -> Option<&str> {
        self.info.split_whitespace().next()
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether `block` opens and closes with a fence.
    ///
    /// The two fences may not share characters, so a lone ```` ``` ```` is
    /// not a code block.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// Splits a fenced block into info string and content.
    ///
    /// Returns `None` if the block is not fenced. The content keeps its
    /// internal and trailing newlines verbatim.
    pub fn split(block: &str) -> Option<FencedCode<'_>> {
        if !Self::is_fenced(block) {
            return None;
        }
        let inner = &block[Self::BACKTICKS.len()..block.len() - Self::BACKTICKS.len()];
        let (info, content) = match inner.split_once('\n') {
            Some((info, content)) => (info.trim(), content),
            // single line: ```code```
            None => ("", inner),
        };
        Some(FencedCode { info, content })
    }
}
