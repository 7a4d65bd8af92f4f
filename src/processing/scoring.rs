//! Weighted aggregation of component scores into the ATS compatibility score

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::formatting::FormattingScore;
use crate::processing::keyword_matcher::KeywordMatch;
use crate::processing::skills_gap::SkillsGap;
use serde::{Deserialize, Serialize};

/// Fixed policy weights; must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword_weight: f64,
    pub formatting_weight: f64,
    pub skills_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_weight: 0.4,
            formatting_weight: 0.3,
            skills_weight: 0.3,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        let sum = self.keyword_weight + self.formatting_weight + self.skills_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

/// Fraction of identified skills present in the resume; 0 when no skills
/// were identified at all.
pub fn skills_match_score(skills_gap: &SkillsGap) -> f64 {
    let total_matched = skills_gap.matched.total();
    let total_missing = skills_gap.missing.total();
    let total_skills = total_matched + total_missing;

    if total_skills > 0 {
        total_matched as f64 / total_skills as f64
    } else {
        0.0
    }
}

/// Combine keyword, formatting, and skills scores into one 0-100 integer.
pub fn aggregate_score(
    keyword_match: &KeywordMatch,
    formatting_score: &FormattingScore,
    skills_gap: &SkillsGap,
    weights: &ScoringWeights,
) -> u8 {
    let combined = keyword_match.score * weights.keyword_weight
        + formatting_score.score * weights.formatting_weight
        + skills_match_score(skills_gap) * weights.skills_weight;

    (combined * 100.0).round() as u8
}
