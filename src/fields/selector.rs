/// Canonical form of a field name for selector matching.
///
/// Lowercases and drops `-`, `_` and whitespace, so `FooBar`, `foo_bar` and
/// `foo-bar` all become `foobar`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Dotted path of field names picking one branch through nested oneof levels.
///
/// The first segment applies to the current object; [`SelectorPath::rest`] is
/// what the selected field hands to its own nested rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorPath<'a> {
    raw: &'a str,
}

impl<'a> SelectorPath<'a> {
    /// Wrap a dotted path. Blank input yields `None`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self { raw })
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Segment applying to the current level
    pub fn first(&self) -> &'a str {
        match self.raw.split_once('.') {
            Some((first, _)) => first,
            None => self.raw,
        }
    }

    /// Everything after the first dot
    pub fn rest(&self) -> Option<SelectorPath<'a>> {
        self.raw
            .split_once('.')
            .and_then(|(_, rest)| SelectorPath::parse(rest))
    }

    /// Whether the first segment names `field_name`. Empty segments match nothing.
    pub fn matches(&self, field_name: &str) -> bool {
        let segment = normalize_name(self.first());
        !segment.is_empty() && segment == normalize_name(field_name)
    }

    /// Selector to forward into `field_name`'s nested rendering: the remainder
    /// when the first segment matches, nothing otherwise.
    pub fn forward_for(&self, field_name: &str) -> Option<SelectorPath<'a>> {
        if self.matches(field_name) {
            self.rest()
        } else {
            None
        }
    }
}

impl std::fmt::Display for SelectorPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
