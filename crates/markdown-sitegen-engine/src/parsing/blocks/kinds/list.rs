/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::MARKER))
    }

    /// Item text of each line, marker removed.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
    }
}

/// `1. item` lists numbered from one without gaps.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the line at `index` (0-based): `"1. "`, `"2. "`, ...
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// Item text of each line, numeric marker removed.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block.lines().enumerate().map(|(i, line)| {
            line.strip_prefix(Self::marker(i).as_str()).unwrap_or(line)
        })
    }
}
