//! Analysis engine orchestrating the full resume-vs-job pipeline
//!
//! The engine is constructed once per configuration, compiling every regex
//! up front, and can then run any number of analyses. Analysis itself is
//! pure: the same inputs always produce the same result.

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::formatting::{FormattingChecker, FormattingScore};
use crate::processing::keyword_matcher::{self, KeywordMatch};
use crate::processing::recommendations::{
    CareerLevel, Certification, RecommendationEngine, RoadmapPhase,
};
use crate::processing::scoring::{self, ScoringWeights};
use crate::processing::skills_gap::{SkillsGap, SkillsGapAnalyzer};
use crate::processing::tokenizer::{FrequencyIndex, Tokenizer};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One analysis invocation's inputs.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_text: String,
    pub career_level: Option<CareerLevel>,
    pub target_industry: String,
}

/// Complete analysis output, serializable as-is for JSON reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall ATS compatibility score, 0-100.
    pub ats_score: u8,
    pub keyword_match: KeywordMatch,
    pub formatting_score: FormattingScore,
    pub skills_gap: SkillsGap,
    pub certifications: Vec<Certification>,
    pub learning_roadmap: Vec<RoadmapPhase>,
    pub suggestions: Vec<String>,
    pub salary_potential: u32,
    pub summary: String,
    pub quick_wins: Vec<String>,
    pub interview_questions: Vec<String>,
}

pub struct AnalysisEngine {
    tokenizer: Tokenizer,
    formatting_checker: FormattingChecker,
    skills_analyzer: SkillsGapAnalyzer,
    recommendations: RecommendationEngine,
    weights: ScoringWeights,
    min_resume_chars: usize,
    min_job_chars: usize,
}

impl AnalysisEngine {
    /// Compiles all matchers and checkers from the configuration. A
    /// malformed catalog entry fails construction rather than a later
    /// analysis call.
    pub fn new(config: &Config) -> Result<Self> {
        config.scoring.validate()?;

        Ok(Self {
            tokenizer: Tokenizer::new(&config.analysis.stopwords),
            formatting_checker: FormattingChecker::new(&config.analysis.formatting_rules)?,
            skills_analyzer: SkillsGapAnalyzer::new(&config.analysis.skill_categories)?,
            recommendations: RecommendationEngine::new(config.recommendations.clone()),
            weights: config.scoring.clone(),
            min_resume_chars: config.analysis.min_resume_chars,
            min_job_chars: config.analysis.min_job_chars,
        })
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        self.validate_inputs(request)?;

        info!("Starting resume analysis");

        let resume_tokens = self.tokenizer.tokenize(&request.resume_text);
        let job_tokens = self.tokenizer.tokenize(&request.job_text);
        debug!(
            "Tokenized {} resume tokens, {} job tokens",
            resume_tokens.len(),
            job_tokens.len()
        );

        let resume_freq = FrequencyIndex::from_tokens(&resume_tokens);
        let jd_freq = FrequencyIndex::from_tokens(&job_tokens);

        let keyword_match = keyword_matcher::match_keywords(&resume_freq, &jd_freq);
        debug!(
            "Keyword match: {:.2} ({} of {} terms)",
            keyword_match.score,
            keyword_match.matched_keywords.len(),
            keyword_match.total_jd_keywords
        );

        let formatting_score = self.formatting_checker.check(&request.resume_text);
        debug!(
            "Formatting: {} of {} checks passed",
            formatting_score.passed_count, formatting_score.total_checks
        );

        let resume_lower = request.resume_text.to_lowercase();
        let job_lower = request.job_text.to_lowercase();
        let skills_gap = self.skills_analyzer.analyze(&resume_lower, &job_lower);
        debug!(
            "Skills gap: {} matched, {} missing",
            skills_gap.matched.total(),
            skills_gap.missing.total()
        );

        let ats_score =
            scoring::aggregate_score(&keyword_match, &formatting_score, &skills_gap, &self.weights);
        info!("ATS compatibility score: {}", ats_score);

        let certifications = self.recommendations.certifications(
            &skills_gap,
            request.career_level,
            &request.target_industry,
        );
        let salary_potential = self
            .recommendations
            .salary_potential(&skills_gap, &certifications);
        let learning_roadmap = self.recommendations.learning_roadmap(&skills_gap);
        let suggestions =
            self.recommendations
                .suggestions(ats_score, &keyword_match, &formatting_score, &skills_gap);
        let summary = self.recommendations.summary(ats_score, &skills_gap);
        let quick_wins =
            self.recommendations
                .quick_wins(&skills_gap, &keyword_match, &formatting_score);
        let interview_questions = self
            .recommendations
            .interview_questions(&request.target_industry);

        Ok(AnalysisResult {
            ats_score,
            keyword_match,
            formatting_score,
            skills_gap,
            certifications,
            learning_roadmap,
            suggestions,
            salary_potential,
            summary,
            quick_wins,
            interview_questions,
        })
    }

    fn validate_inputs(&self, request: &AnalysisRequest) -> Result<()> {
        let resume_chars = request.resume_text.chars().count();
        if resume_chars < self.min_resume_chars {
            return Err(ResumeAnalyzerError::InsufficientInput(format!(
                "Resume text is too short: {} characters (minimum {})",
                resume_chars, self.min_resume_chars
            )));
        }

        let job_chars = request.job_text.chars().count();
        if job_chars < self.min_job_chars {
            return Err(ResumeAnalyzerError::InsufficientInput(format!(
                "Job description is too short: {} characters (minimum {})",
                job_chars, self.min_job_chars
            )));
        }

        Ok(())
    }
}
