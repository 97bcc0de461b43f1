use std::path::Path;

use super::base_path::rewrite_base_path;
use crate::io::{self, IoError};

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        io::read_file(path).map(Self::new)
    }

    /// The same template with its own root-relative links moved under `base`.
    pub fn with_base_path(&self, base: &str) -> Self {
        Self::new(rewrite_base_path(&self.source, base))
    }

    /// Substitutes every placeholder occurrence.
    ///
    /// Only the template is scanned; placeholder text inside `title` or
    /// `content` is left as is.
    pub fn render(&self, title: &str, content: &str) -> String {
        let substitutions = [(Self::TITLE, title), (Self::CONTENT, content)];
        let mut out = String::with_capacity(self.source.len() + title.len() + content.len());
        let mut rest = self.source.as_str();

        loop {
            let next = substitutions
                .iter()
                .filter_map(|&(placeholder, value)| {
                    rest.find(placeholder).map(|at| (at, placeholder, value))
                })
                .min_by_key(|&(at, ..)| at);

            let Some((at, placeholder, value)) = next else {
                out.push_str(rest);
                return out;
            };
            out.push_str(&rest[..at]);
            out.push_str(value);
            rest = &rest[at + placeholder.len()..];
        }
    }
}
