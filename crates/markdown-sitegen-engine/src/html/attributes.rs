/// HTML attributes in insertion order.
///
/// A `Vec` rather than a map: documents carry one or two attributes per
/// element, and serialization must follow the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing attribute keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Replaces each value for which `f` returns `Some`, keeping order.
    pub fn map_values<F>(self, f: &F) -> Self
    where
        F: Fn(&str, &str) -> Option<String>,
    {
        Self(
            self.0
                .into_iter()
                .map(|(name, value)| {
                    let value = f(name.as_str(), value.as_str()).unwrap_or(value);
                    (name, value)
                })
                .collect(),
        )
    }

    /// Appends ` name="value"` for every attribute, escaping values.
    pub(crate) fn write_html(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(attrs: &Attributes) -> String {
        let mut out = String::new();
        attrs.write_html(&mut out);
        out
    }

    #[test]
    fn renders_in_insertion_order() {
        let attrs = Attributes::new()
            .with("href", "https://www.google.com")
            .with("target", "_blank");
        assert_eq!(
            render(&attrs),
            r#" href="https://www.google.com" target="_blank""#
        );
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(render(&Attributes::new()), "");
    }

    #[test]
    fn set_replaces_value_in_place() {
        let mut attrs = Attributes::new().with("src", "a.png").with("alt", "a");
        attrs.set("src", "b.png");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(render(&attrs), r#" src="b.png" alt="a""#);
    }

    #[test]
    fn values_are_quote_escaped() {
        let attrs = Attributes::new().with("alt", r#"say "hi""#);
        assert_eq!(render(&attrs), r#" alt="say &quot;hi&quot;""#);
    }

    #[test]
    fn map_values_keeps_unmatched() {
        let attrs = Attributes::new().with("href", "/a").with("title", "t");
        let mapped = attrs.map_values(&|name: &str, _: &str| (name == "href").then(|| "/b".to_string()));
        assert_eq!(render(&mapped), r#" href="/b" title="t""#);
    }

    #[test]
    fn collects_from_pairs() {
        let attrs: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);
    }
}
