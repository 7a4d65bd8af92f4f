//! Recommendation generation from the skills gap and component scores
//!
//! Certification ranking, salary estimation, learning roadmap, suggestions,
//! summary, quick wins, and interview questions. Everything here is a pure
//! function of the analysis results plus the static catalogs.

use crate::config::RecommendationConfig;
use crate::processing::formatting::FormattingScore;
use crate::processing::keyword_matcher::KeywordMatch;
use crate::processing::skills_gap::{Priority, SkillsGap};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const BASE_SALARY: f64 = 60_000.0;
const SALARY_PER_MATCHED_SKILL: f64 = 2_500.0;
const CERT_VALUE_FACTOR: f64 = 0.7;
const SALARY_CAP: f64 = 280_000.0;

const MAX_CERTIFICATIONS: usize = 6;
const MAX_SUGGESTIONS: usize = 6;
const MAX_QUICK_WINS: usize = 5;
const MAX_INTERVIEW_QUESTIONS: usize = 9;
const MAX_PHASE_SKILLS: usize = 3;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CareerLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl CareerLevel {
    /// Key used in the level-to-difficulty configuration map.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLevel::Entry => "entry",
            CareerLevel::Mid => "mid",
            CareerLevel::Senior => "senior",
            CareerLevel::Lead => "lead",
            CareerLevel::Executive => "executive",
        }
    }
}

/// Static certification catalog entry, read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub difficulty: String,
    pub cost: String,
    pub time_to_complete: String,
    pub prerequisites: Vec<String>,
    /// "min - max" salary range, e.g. "$25,000 - $40,000".
    pub salary_increase: String,
    pub job_market_value: String,
    pub pass_rate: String,
    pub validity_period: String,
    pub category: String,
    pub description: String,
}

impl Certification {
    /// Lower bound of the salary increase range, used as the ROI score.
    pub fn salary_lower_bound(&self) -> Option<u32> {
        let lower = self.salary_increase.split(" - ").next()?;
        let digits: String = lower.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub title: String,
    pub skills: Vec<String>,
    pub platform: String,
    pub time_frame: String,
    pub outcome: String,
}

pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Filter the catalog by relevance to the missing skills and target
    /// industry, restrict by career level, then rank by ROI descending and
    /// keep the top six. An empty result stays empty.
    pub fn certifications(
        &self,
        skills_gap: &SkillsGap,
        career_level: Option<CareerLevel>,
        target_industry: &str,
    ) -> Vec<Certification> {
        let missing_skills_text = skills_gap
            .missing
            .technical
            .iter()
            .chain(skills_gap.missing.industry.iter())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let industry = target_industry.to_lowercase();

        let mut relevant: Vec<Certification> = self
            .config
            .certifications
            .iter()
            .filter(|cert| {
                let category = cert.category.to_lowercase();
                let name = cert.name.to_lowercase();
                let cert_relevant = missing_skills_text.contains(&category)
                    || missing_skills_text.contains(&name)
                    || category.contains(&industry);

                match career_level {
                    Some(level) => {
                        cert_relevant
                            && self
                                .config
                                .level_difficulty
                                .get(level.as_str())
                                .map_or(false, |allowed| allowed.contains(&cert.difficulty))
                    }
                    None => cert_relevant,
                }
            })
            .cloned()
            .collect();

        relevant.sort_by(|a, b| {
            b.salary_lower_bound()
                .unwrap_or(0)
                .cmp(&a.salary_lower_bound().unwrap_or(0))
        });
        relevant.truncate(MAX_CERTIFICATIONS);
        relevant
    }

    /// Base salary plus matched-skill value plus a conservative share of the
    /// recommended certifications' lower-bound increases, capped.
    pub fn salary_potential(
        &self,
        skills_gap: &SkillsGap,
        certifications: &[Certification],
    ) -> u32 {
        let matched_value = skills_gap.matched.total() as f64 * SALARY_PER_MATCHED_SKILL;
        let cert_value: f64 = certifications
            .iter()
            .filter_map(|cert| cert.salary_lower_bound())
            .map(|min| f64::from(min) * CERT_VALUE_FACTOR)
            .sum();

        (BASE_SALARY + matched_value + cert_value).min(SALARY_CAP).round() as u32
    }

    /// Up to three ordered phases: high-priority skills, medium-priority
    /// skills, then certification preparation (always emitted).
    pub fn learning_roadmap(&self, skills_gap: &SkillsGap) -> Vec<RoadmapPhase> {
        let mut roadmap = Vec::new();

        let mut high_priority = skills_gap.missing_with_priority(Priority::High);
        if !high_priority.is_empty() {
            high_priority.truncate(MAX_PHASE_SKILLS);
            roadmap.push(RoadmapPhase {
                title: "🎯 Phase 1: High-Impact Skills (Weeks 1-6)".to_string(),
                skills: high_priority,
                platform: "LinkedIn Learning, Coursera".to_string(),
                time_frame: "6 weeks intensive".to_string(),
                outcome: "Immediate resume impact and interview readiness".to_string(),
            });
        }

        let mut medium_priority = skills_gap.missing_with_priority(Priority::Medium);
        if !medium_priority.is_empty() {
            medium_priority.truncate(MAX_PHASE_SKILLS);
            roadmap.push(RoadmapPhase {
                title: "📈 Phase 2: Supporting Skills (Weeks 7-12)".to_string(),
                skills: medium_priority,
                platform: "Udemy, Pluralsight".to_string(),
                time_frame: "6 weeks structured learning".to_string(),
                outcome: "Enhanced technical competency and market value".to_string(),
            });
        }

        roadmap.push(RoadmapPhase {
            title: "🏆 Phase 3: Professional Certification (Months 4-6)".to_string(),
            skills: vec!["Industry Certification Preparation".to_string()],
            platform: "Official Training Providers".to_string(),
            time_frame: "2-3 months intensive prep".to_string(),
            outcome: "Salary increase potential of $15K-$40K".to_string(),
        });

        roadmap
    }

    /// Prioritized improvement suggestions, fixed order, at most six.
    pub fn suggestions(
        &self,
        ats_score: u8,
        keyword_match: &KeywordMatch,
        formatting_score: &FormattingScore,
        skills_gap: &SkillsGap,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        if ats_score < 70 {
            suggestions.push(
                "Optimize your resume for ATS by incorporating more relevant keywords from the job description."
                    .to_string(),
            );
        }

        let missing_count = skills_gap.missing.total();
        if missing_count > 0 {
            suggestions.push(format!(
                "Add {} missing skills to better match the job requirements.",
                missing_count
            ));
        }

        if keyword_match.missing_keywords.len() > 5 {
            suggestions.push(format!(
                "Include important keywords: {}.",
                keyword_match.missing_keywords[..3].join(", ")
            ));
        }

        if formatting_score.score < 0.8 {
            suggestions
                .push("Improve resume structure and formatting for better ATS parsing.".to_string());
        }

        suggestions
            .push("Consider pursuing relevant certifications to boost your qualifications.".to_string());
        suggestions
            .push("Quantify your achievements with specific numbers and percentages.".to_string());

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// Templated executive summary with a tier message keyed on the score.
    pub fn summary(&self, ats_score: u8, skills_gap: &SkillsGap) -> String {
        let matched_skills = skills_gap.matched.total();
        let missing_skills = skills_gap.missing.total();

        let mut summary = format!(
            "Your resume achieved an ATS compatibility score of {}% against the target position. ",
            ats_score
        );

        if ats_score >= 80 {
            summary.push_str(
                "Outstanding performance! Your resume demonstrates excellent alignment with the job requirements and should perform very well in automated screening systems. ",
            );
        } else if ats_score >= 60 {
            summary.push_str(
                "Solid foundation with strategic improvement opportunities. Your resume shows good potential and with targeted enhancements can achieve excellent ATS performance. ",
            );
        } else {
            summary.push_str(
                "Significant optimization potential identified. Our analysis reveals multiple high-impact areas where strategic improvements can dramatically boost your resume's effectiveness. ",
            );
        }

        summary.push_str(&format!(
            "You currently demonstrate proficiency in {} relevant skills while having {} skills identified for development. ",
            matched_skills, missing_skills
        ));
        summary.push_str(
            "Focus on our high-priority recommendations and consider the suggested certifications to maximize your career advancement potential.",
        );

        summary
    }

    /// Short actionable callouts, at most five.
    pub fn quick_wins(
        &self,
        skills_gap: &SkillsGap,
        keyword_match: &KeywordMatch,
        formatting_score: &FormattingScore,
    ) -> Vec<String> {
        let mut wins = Vec::new();

        if !keyword_match.missing_keywords.is_empty() {
            let top: Vec<&str> = keyword_match
                .missing_keywords
                .iter()
                .take(3)
                .map(|s| s.as_str())
                .collect();
            wins.push(format!("🔑 Add critical keywords: {}", top.join(", ")));
        }

        let high_priority: Vec<String> = skills_gap
            .missing_with_priority(Priority::High)
            .into_iter()
            .take(2)
            .collect();
        if !high_priority.is_empty() {
            wins.push(format!(
                "⭐ Highlight experience with: {}",
                high_priority.join(", ")
            ));
        }

        if let Some(failed) = formatting_score.checks.iter().find(|check| !check.passed) {
            wins.push(format!(
                "📝 Improve formatting: {}",
                failed.name.to_lowercase()
            ));
        }

        wins.push("📊 Quantify achievements with specific numbers and percentages".to_string());
        wins.push("🎯 Tailor your professional summary to match the job description".to_string());
        wins.push("⚡ Use stronger action verbs to begin each bullet point".to_string());

        wins.truncate(MAX_QUICK_WINS);
        wins
    }

    /// Base question bank plus an industry-specific question when the target
    /// industry matches a configured key, truncated to nine.
    pub fn interview_questions(&self, target_industry: &str) -> Vec<String> {
        let mut questions = self.config.interview_questions.clone();

        if let Some(question) = self.config.industry_questions.get(target_industry) {
            questions.push(question.clone());
        }

        questions.truncate(MAX_INTERVIEW_QUESTIONS);
        questions
    }
}
