use std::fmt;

/// Ordered list of normalized, dot-prefixed file extensions.
///
/// Entries are never empty and always start with `.`. Comparison against a
/// file extension is case-insensitive. Duplicates are kept because matching
/// only asks whether any entry fits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    entries: Vec<String>,
}

impl ExtensionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Normalizes raw extension tokens.
    ///
    /// Each token is trimmed, empty tokens are dropped and a leading `.` is
    /// added where missing. Surviving entries keep their input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirdigest::ExtensionSet;
    ///
    /// let set = ExtensionSet::normalize([" md", "", ".go", "mbt "]);
    /// assert_eq!(set.as_slice(), [".md", ".go", ".mbt"]);
    /// ```
    #[must_use]
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = raw
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref().trim();
                if token.is_empty() {
                    None
                } else if token.starts_with('.') {
                    Some(token.to_string())
                } else {
                    Some(format!(".{token}"))
                }
            })
            .collect();

        Self { entries }
    }

    /// Parses a comma separated list such as `"md, go,.mbt"`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::normalize(list.split(','))
    }

    /// Returns true if `extension` case-insensitively equals any entry.
    ///
    /// An empty extension never matches, since entries are never empty.
    #[must_use]
    pub fn matches(&self, extension: &str) -> bool {
        if extension.is_empty() {
            return false;
        }
        let wanted = extension.to_lowercase();
        self.entries.iter().any(|e| e.to_lowercase() == wanted)
    }

    /// Returns true if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Iterates over the entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.entries.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::normalize(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_dots_and_trims() {
        let set = ExtensionSet::normalize(["md", " go ", ".mbt"]);
        assert_eq!(set.as_slice(), [".md", ".go", ".mbt"]);
    }

    #[test]
    fn test_normalize_drops_empty_tokens() {
        let set = ExtensionSet::parse(" , md,,  ,");
        assert_eq!(set.as_slice(), [".md"]);
    }

    #[test]
    fn test_empty_list_gives_empty_set() {
        assert!(ExtensionSet::parse("").is_empty());
        assert!(ExtensionSet::normalize(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let set = ExtensionSet::parse("go,.go");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["md,go,mbt", " .rs , toml,, ", "", ".a,b,.C", "..x, y"] {
            let once = ExtensionSet::parse(raw);
            let twice = ExtensionSet::normalize(once.iter());
            assert_eq!(once, twice, "input {raw:?}");
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let set = ExtensionSet::parse("md,GO");
        assert!(set.matches(".MD"));
        assert!(set.matches(".go"));
        assert!(!set.matches(".rs"));
    }

    #[test]
    fn test_empty_extension_never_matches() {
        let set = ExtensionSet::parse("md");
        assert!(!set.matches(""));
        assert!(!ExtensionSet::new().matches(""));
    }

    #[test]
    fn test_display() {
        let set = ExtensionSet::parse("md,go");
        assert_eq!(set.to_string(), "[.md .go]");
    }
}
