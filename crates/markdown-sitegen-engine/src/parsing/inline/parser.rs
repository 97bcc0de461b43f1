use super::{
    error::ParseError,
    kinds::{Delimiter, Image, Link, reference::Reference},
    types::InlineSpan,
};

/// Parses block text into a sequence of [`InlineSpan`]s.
///
/// Passes run in a fixed order:
/// 1. delimiter splitting for `**`, then `_`, then `` ` ``
/// 2. image extraction
/// 3. link extraction
///
/// Each pass only looks at spans that are still plain, so text typed by an
/// earlier pass is never re-split. Empty plain spans are dropped from the
/// result.
///
/// # Errors
/// [`ParseError::MalformedMarkdown`] when a delimiter is left unmatched.
pub fn parse_inline(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    let mut spans = vec![InlineSpan::plain(text)];
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }
    spans = split_images(spans)?;
    spans = split_links(spans)?;
    spans.retain(|span| !(span.is_plain() && span.text().is_empty()));
    Ok(spans)
}

/// Splits every plain span on `delimiter`.
///
/// Segments alternate plain/delimited starting with plain, so
/// `"a **b** c"` becomes `[plain "a ", bold "b", plain " c"]`. Spans of any
/// other kind pass through untouched.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: Delimiter,
) -> Result<Vec<InlineSpan>, ParseError> {
    if spans.is_empty() {
        return Err(ParseError::EmptyInput {
            step: "delimiter splitting",
        });
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text().split(delimiter.as_str()).collect();
        // n delimiters give n + 1 segments; an even segment count means one is unmatched
        if segments.len() % 2 == 0 {
            return Err(ParseError::MalformedMarkdown {
                delimiter: delimiter.as_str(),
                text: span.text().to_string(),
            });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if i % 2 == 0 {
                out.push(InlineSpan::plain(segment));
            } else {
                out.push(InlineSpan::new(delimiter.kind(), segment));
            }
        }
    }
    Ok(out)
}

/// Replaces `![alt](url)` references in plain spans with image spans.
pub fn split_images(spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>, ParseError> {
    split_references(spans, "image extraction", Image::find_all, |alt, url| {
        InlineSpan::image(alt, url)
    })
}

/// Replaces `[text](url)` references in plain spans with link spans.
pub fn split_links(spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>, ParseError> {
    split_references(spans, "link extraction", Link::find_all, |text, url| {
        InlineSpan::link(text, url)
    })
}

fn split_references(
    spans: Vec<InlineSpan>,
    step: &'static str,
    find: fn(&str) -> Vec<Reference<'_>>,
    make: fn(&str, &str) -> InlineSpan,
) -> Result<Vec<InlineSpan>, ParseError> {
    if spans.is_empty() {
        return Err(ParseError::EmptyInput { step });
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text();
        let refs = find(text);
        if refs.is_empty() {
            out.push(span);
            continue;
        }

        let mut last = 0;
        for r in refs {
            out.push(InlineSpan::plain(&text[last..r.range.start]));
            out.push(make(r.text, r.url));
            last = r.range.end;
        }
        if last < text.len() {
            out.push(InlineSpan::plain(&text[last..]));
        }
    }
    Ok(out)
}

/// `(alt, url)` for every image reference in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    Image::find_all(text)
        .into_iter()
        .map(|r| (r.text, r.url))
        .collect()
}

/// `(text, url)` for every link reference in `text`, images excluded.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    Link::find_all(text)
        .into_iter()
        .map(|r| (r.text, r.url))
        .collect()
}
