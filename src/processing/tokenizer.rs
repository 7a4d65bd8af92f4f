//! Text tokenization and term frequency counting

use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Normalizes raw text into filtered word tokens.
pub struct Tokenizer {
    stopwords: HashSet<String>,
    scrub_regex: Regex,
}

impl Tokenizer {
    pub fn new(stopwords: &[String]) -> Self {
        let stopwords = stopwords.iter().map(|s| s.to_lowercase()).collect();

        // Anything that is not a word character or whitespace becomes a space.
        let scrub_regex = Regex::new(r"[^\w\s]").expect("Invalid scrub regex");

        Self {
            stopwords,
            scrub_regex,
        }
    }

    /// Lowercase, scrub punctuation, split on whitespace, and keep tokens
    /// longer than two characters that are not stopwords. Total function:
    /// empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let scrubbed = self.scrub_regex.replace_all(&lowered, " ");

        scrubbed
            .split_whitespace()
            .filter(|word| word.chars().count() > 2 && !self.stopwords.contains(*word))
            .map(|word| word.to_string())
            .collect()
    }
}

/// Term to occurrence-count mapping, immutable after construction.
///
/// Preserves first-seen term order so that consumers sorting by count get a
/// deterministic tie order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    terms: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl FrequencyIndex {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for token in tokens {
            let token = token.as_ref();
            match index.positions.get(token) {
                Some(&pos) => index.terms[pos].1 += 1,
                None => {
                    index.positions.insert(token.to_string(), index.terms.len());
                    index.terms.push((token.to_string(), 1));
                }
            }
        }
        index
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.positions.get(term).map(|&pos| self.terms[pos].1)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.positions.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms with counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.terms.iter().map(|(term, count)| (term.as_str(), *count))
    }
}
