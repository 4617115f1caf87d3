//! `{{placeholder}}` substitution.
//!
//! Keys are bare identifiers (`author`, not `{{author}}`). Expansion is a
//! single left-to-right pass over the template: replacement values are never
//! rescanned, so a value containing `{{x}}` stays literal. Unknown
//! placeholders are left untouched.

use std::collections::BTreeMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Ordered placeholder map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Expand every known `{{key}}` in `template`.
    pub fn apply(&self, template: &str) -> String {
        if self.values.is_empty() {
            return template.to_string();
        }

        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let replaced = after_open.find(CLOSE).and_then(|end| {
                self.values
                    .get(&after_open[..end])
                    .map(|value| (value, end + CLOSE.len()))
            });

            match replaced {
                Some((value, consumed)) => {
                    out.push_str(value);
                    rest = &after_open[consumed..];
                }
                None => {
                    out.push_str(OPEN);
                    rest = after_open;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut subs = Self::new();
        for (k, v) in iter {
            subs.insert(k, v);
        }
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_is_identity() {
        let text = "Hello {{name}}, {{ unknown }} {{";
        assert_eq!(Substitutions::new().apply(text), text);
    }

    #[test]
    fn replaces_every_occurrence() {
        let subs = Substitutions::new().with("name", "calc");
        assert_eq!(subs.apply("{{name}}/{{name}}.h"), "calc/calc.h");
    }

    #[test]
    fn values_are_not_rescanned() {
        let subs = Substitutions::new()
            .with("a", "{{b}}")
            .with("b", "boom");
        assert_eq!(subs.apply("[{{a}}]"), "[{{b}}]");
    }

    #[test]
    fn unknown_and_unterminated_placeholders_stay_literal() {
        let subs = Substitutions::new().with("x", "1");
        assert_eq!(subs.apply("{{y}} {{x}} {{x"), "{{y}} 1 {{x");
    }

    #[test]
    fn adjacent_braces() {
        let subs = Substitutions::new().with("x", "1");
        assert_eq!(subs.apply("{{{{x}}}}"), "{{1}}");
    }

    #[test]
    fn collects_from_pairs() {
        let subs: Substitutions = [("author", "Ada"), ("year", "2026")].into_iter().collect();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs.get("author"), Some("Ada"));
        assert_eq!(
            subs.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            ["author", "year"]
        );
    }
}
