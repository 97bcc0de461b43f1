use super::ConvertError;

/// Prefix of a level-1 heading line.
const TITLE_PREFIX: &str = "# ";

/// Returns the trimmed text of the first line starting with `# `.
///
/// The heading may appear anywhere in the document, after any amount of
/// other text.
pub fn extract_title(document: &str) -> Result<String, ConvertError> {
    document
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::NoTitleFound)
}
