use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref ALPHABETIC: Regex = Regex::new(r"^\p{L}+$").expect("valid regex");
}

/// Punctuation stripped from the end of a token. Interior punctuation is
/// never stripped and disqualifies the token instead.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Words excluded from indexing regardless of how often they occur.
/// Membership is case-insensitive; words are lowercased on insertion.
#[derive(Debug, Default, Clone)]
pub struct NoiseWords(HashSet<String>);

impl NoiseWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) {
        self.0.insert(word.to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = Self::new();
        for word in iter {
            words.insert(word.as_ref());
        }
        words
    }
}

/// Split raw text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Normalize a raw token into an indexable keyword, or reject it.
///
/// The token is lowercased and stripped of trailing punctuation. It is
/// rejected if nothing remains, if the remainder is a noise word, or if any
/// remaining character is not a letter.
pub fn normalize(token: &str, noise_words: &NoiseWords) -> Option<String> {
    let lowered = token.to_lowercase();
    let stripped = lowered.trim_end_matches(&TRAILING_PUNCTUATION[..]);
    if stripped.is_empty() || noise_words.contains(stripped) {
        return None;
    }
    if !ALPHABETIC.is_match(stripped) {
        return None;
    }
    Some(stripped.to_string())
}
