/// ATX heading block: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Heading level of `block`, or `None` if it is not a heading.
    ///
    /// The `#` scan stops after [`Heading::MAX_LEVEL`] characters; the run must
    /// be followed by a space.
    pub fn level(block: &str) -> Option<u8> {
        let level = block
            .chars()
            .take(Self::MAX_LEVEL as usize)
            .take_while(|&c| c == Self::MARKER)
            .count();
        if level == 0 {
            return None;
        }
        // `#` is one byte, so `level` is also the byte offset after the run
        block[level..].starts_with(' ').then_some(level as u8)
    }

    /// Strips the leading `#` run and the spaces after it.
    pub fn strip(block: &str) -> &str {
        block
            .trim_start_matches(Self::MARKER)
            .trim_start_matches(' ')
    }

    /// The element tag for a level, `h1` to `h6`.
    pub fn tag(level: u8) -> String {
        format!("h{}", level.clamp(1, Self::MAX_LEVEL))
    }
}
