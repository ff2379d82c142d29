use unicode_general_category::{get_general_category, GeneralCategory};

/// Trait for counting tokens in text.
pub trait TokenEstimator {
    /// Returns the number of tokens in the given text.
    fn estimate(&self, text: &str) -> usize;
}

/// Word-count tokenizer.
///
/// A token is a maximal run of characters that are neither whitespace nor
/// Unicode punctuation (general category `P*`). Symbols such as `+`, `$` or
/// `|` are not punctuation and stay inside tokens. There is no handling of
/// contractions, numbers or code syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl TokenEstimator for WordTokenizer {
    fn estimate(&self, text: &str) -> usize {
        count_tokens(text)
    }
}

/// Counts tokens in `text` using [`WordTokenizer`] rules.
///
/// # Examples
///
/// ```
/// assert_eq!(dirdigest::count_tokens("a, b.  c"), 3);
/// assert_eq!(dirdigest::count_tokens("a b c"), 3);
/// ```
#[must_use]
pub fn count_tokens(text: &str) -> usize {
    text.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .count()
}

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

#[inline]
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
