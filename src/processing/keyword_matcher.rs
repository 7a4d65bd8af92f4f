//! Keyword matching between resume and job description term frequencies

use crate::processing::tokenizer::FrequencyIndex;
use serde::{Deserialize, Serialize};

const MAX_MATCHED_KEYWORDS: usize = 30;
const MAX_MISSING_KEYWORDS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedKeyword {
    pub keyword: String,
    pub jd_count: usize,
    pub resume_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Fraction of distinct job-description terms also found in the resume.
    pub score: f64,
    /// Matched terms ranked by job-description count, capped at 30.
    pub matched_keywords: Vec<MatchedKeyword>,
    /// Missing terms ranked by job-description count, capped at 20.
    pub missing_keywords: Vec<String>,
    pub total_jd_keywords: usize,
}

/// Compare the two frequency indexes and produce matched/missing keyword
/// sets plus the match ratio.
pub fn match_keywords(resume_freq: &FrequencyIndex, jd_freq: &FrequencyIndex) -> KeywordMatch {
    let mut jd_keywords: Vec<(&str, usize)> = jd_freq.iter().collect();
    // Stable sort: ties keep first-seen order from the frequency index.
    jd_keywords.sort_by(|a, b| b.1.cmp(&a.1));

    let total_jd_keywords = jd_keywords.len();
    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for (keyword, jd_count) in jd_keywords {
        match resume_freq.get(keyword) {
            Some(resume_count) => matched_keywords.push(MatchedKeyword {
                keyword: keyword.to_string(),
                jd_count,
                resume_count,
            }),
            None => missing_keywords.push(keyword.to_string()),
        }
    }

    let score = if total_jd_keywords > 0 {
        matched_keywords.len() as f64 / total_jd_keywords as f64
    } else {
        0.0
    };

    matched_keywords.truncate(MAX_MATCHED_KEYWORDS);
    missing_keywords.truncate(MAX_MISSING_KEYWORDS);

    KeywordMatch {
        score,
        matched_keywords,
        missing_keywords,
        total_jd_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(tokens: &[&str]) -> FrequencyIndex {
        FrequencyIndex::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn test_identical_texts_score_one() {
        let freq = index(&["rust", "backend", "rust", "docker"]);
        let result = match_keywords(&freq, &freq);

        assert_eq!(result.score, 1.0);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.matched_keywords.len(), 3);
        assert_eq!(result.total_jd_keywords, 3);
    }

    #[test]
    fn test_partial_match_ratio() {
        let resume = index(&["rust", "docker"]);
        let jd = index(&["rust", "kubernetes", "docker", "terraform"]);
        let result = match_keywords(&resume, &jd);

        assert_eq!(result.score, 0.5);
        assert_eq!(result.matched_keywords.len(), 2);
        assert_eq!(result.missing_keywords.len(), 2);
        assert_eq!(
            result.matched_keywords.len() + result.missing_keywords.len(),
            result.total_jd_keywords
        );
    }

    #[test]
    fn test_ranked_by_jd_count_descending() {
        let resume = index(&[]);
        let jd = index(&["aws", "rust", "rust", "rust", "docker", "docker"]);
        let result = match_keywords(&resume, &jd);

        assert_eq!(result.missing_keywords, vec!["rust", "docker", "aws"]);
    }

    #[test]
    fn test_tied_counts_keep_first_seen_order() {
        let resume = index(&[]);
        let jd = index(&["zeta", "alpha", "mango"]);
        let result = match_keywords(&resume, &jd);

        assert_eq!(result.missing_keywords, vec!["zeta", "alpha", "mango"]);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let resume = index(&["rust"]);
        let jd = index(&[]);
        let result = match_keywords(&resume, &jd);

        assert_eq!(result.score, 0.0);
        assert_eq!(result.total_jd_keywords, 0);
    }

    #[test]
    fn test_caps_applied_after_ranking() {
        let resume = index(&[]);
        let tokens: Vec<String> = (0..40).map(|i| format!("skill{:02}", i)).collect();
        let jd = FrequencyIndex::from_tokens(tokens.iter());
        let result = match_keywords(&resume, &jd);

        assert_eq!(result.missing_keywords.len(), 20);
        assert_eq!(result.total_jd_keywords, 40);
    }
}
