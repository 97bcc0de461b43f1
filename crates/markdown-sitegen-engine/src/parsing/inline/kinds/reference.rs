use std::{ops::Range, sync::OnceLock};

use regex::Regex;

/// A `[text](url)` style reference found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Byte range of the whole match, markup included.
    pub range: Range<usize>,
    /// Bracketed text (alt text for images).
    pub text: &'a str,
    pub url: &'a str,
}

/// Image reference: `![alt](url)`.
pub struct Image;

impl Image {
    /// Marks a bracketed reference as an image.
    pub const BANG: char = '!';

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    /// All image references in `text`, left to right, non-overlapping.
    pub fn find_all(text: &str) -> Vec<Reference<'_>> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| to_reference(&caps))
            .collect()
    }
}

/// Link reference: `[text](url)` not preceded by `!`.
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    /// All link references in `text`, left to right, non-overlapping.
    ///
    /// `regex` has no look-behind, so a candidate preceded by `!` is skipped
    /// by hand and the search resumes one byte after its `[`.
    pub fn find_all(text: &str) -> Vec<Reference<'_>> {
        let mut out = vec![];
        let mut pos = 0;
        while let Some(caps) = Self::regex().captures_at(text, pos) {
            let Some(reference) = to_reference(&caps) else {
                break;
            };
            if text[..reference.range.start].ends_with(Image::BANG) {
                pos = reference.range.start + 1;
                continue;
            }
            pos = reference.range.end;
            out.push(reference);
        }
        out
    }
}

fn to_reference<'a>(caps: &regex::Captures<'a>) -> Option<Reference<'a>> {
    let whole = caps.get(0)?;
    Some(Reference {
        range: whole.range(),
        text: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}
