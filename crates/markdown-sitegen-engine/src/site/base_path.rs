use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::html::Node;

/// Base path that leaves URLs untouched.
pub const ROOT: &str = "/";

/// Attributes holding URLs.
const URL_ATTRIBUTES: [&str; 2] = ["href", "src"];

/// `base` with a trailing slash, or `None` when it leaves URLs untouched.
fn normalized_base(base: &str) -> Option<String> {
    if base.is_empty() || base == ROOT {
        None
    } else if base.ends_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("{base}/"))
    }
}

/// `url` moved under `base` if it is root-relative (`/x`, not `//host`).
fn rebase_url(url: &str, base: &str) -> Option<String> {
    let rest = url.strip_prefix('/')?;
    if rest.starts_with('/') {
        return None;
    }
    Some(format!("{base}{rest}"))
}

/// Moves root-relative `href` and `src` attribute values in a converted
/// page under `base`.
///
/// Only attributes are rewritten; text such as a code sample showing
/// `src="/x"` is left as written. A base of `/` or the empty string is a
/// no-op; a missing trailing slash is added.
pub fn rebase_node(node: Node, base: &str) -> Node {
    let Some(base) = normalized_base(base) else {
        return node;
    };
    node.map_attributes(&|name: &str, value: &str| {
        if URL_ATTRIBUTES.contains(&name) {
            rebase_url(value, &base)
        } else {
            None
        }
    })
}

/// Rewrites root-relative `href="/..."` and `src="/..."` in template markup.
///
/// Meant for hand-written templates only: it matches raw text, so converted
/// pages go through [`rebase_node`] instead. Protocol-relative URLs
/// (`//host/...`) are left alone.
pub fn rewrite_base_path(html: &str, base: &str) -> String {
    let Some(base) = normalized_base(base) else {
        return html.to_string();
    };

    static ROOT_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = ROOT_URL_REGEX.get_or_init(|| {
        Regex::new(r#"\b(href|src)="/([^/])"#).expect("Invalid root url regex")
    });

    regex
        .replace_all(html, |caps: &Captures<'_>| {
            format!(r#"{}="{}{}"#, &caps[1], base, &caps[2])
        })
        .into_owned()
}
