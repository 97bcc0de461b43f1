/// `> quoted` blocks.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Whether every line of `block` starts with `>`.
    pub fn is_quote(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and a single following space from a line.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_requires_every_line() {
        assert!(BlockQuote::is_quote("> one\n> two"));
        assert!(BlockQuote::is_quote(">tight"));
        assert!(!BlockQuote::is_quote("> one\ntwo"));
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), "hello");
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_level() {
        assert_eq!(BlockQuote::strip_prefix("> > nested"), "> nested");
    }
}
