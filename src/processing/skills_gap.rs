//! Category-based skill gap detection between resume and job text

use crate::error::{Result, ResumeAnalyzerError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Industry,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "Technical Skills"),
            SkillCategory::Soft => write!(f, "Soft Skills"),
            SkillCategory::Industry => write!(f, "Industry Skills"),
        }
    }
}

/// One curated skill list, supplied as configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategoryConfig {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Skill names partitioned by category, configuration order preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBuckets {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub industry: Vec<String>,
}

impl SkillBuckets {
    pub fn bucket(&self, category: SkillCategory) -> &Vec<String> {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Industry => &self.industry,
        }
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Industry => &mut self.industry,
        }
    }

    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.industry.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsGap {
    /// Skills present in the resume, per category.
    pub matched: SkillBuckets,
    /// Skills required by the job but absent from the resume, per category.
    pub missing: SkillBuckets,
    /// Priority per missing skill, from its job-text mention count.
    pub priorities: BTreeMap<String, Priority>,
}

impl SkillsGap {
    /// Missing skills carrying the given priority, category order preserved.
    pub fn missing_with_priority(&self, priority: Priority) -> Vec<String> {
        [&self.missing.technical, &self.missing.soft, &self.missing.industry]
            .into_iter()
            .flatten()
            .filter(|skill| self.priorities.get(*skill) == Some(&priority))
            .cloned()
            .collect()
    }
}

/// Presence/count detection for a single skill in free text. Kept behind a
/// trait so literal regex matching can be swapped for smarter matching
/// without touching the scoring logic.
pub trait TextMatcher {
    fn is_present(&self, text: &str) -> bool;
    fn mention_count(&self, text: &str) -> usize;
}

/// Case-insensitive literal matcher; the skill name is escaped so regex
/// metacharacters in names like "Node.js" or "UX/UI Design" match literally.
pub struct LiteralMatcher {
    regex: Regex,
}

impl LiteralMatcher {
    pub fn new(skill: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&regex::escape(skill))
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                ResumeAnalyzerError::Configuration(format!(
                    "Invalid skill pattern '{}': {}",
                    skill, e
                ))
            })?;
        Ok(Self { regex })
    }
}

impl TextMatcher for LiteralMatcher {
    fn is_present(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn mention_count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// Detects curated skills in resume and job text and classifies the gap.
pub struct SkillsGapAnalyzer {
    categories: Vec<(SkillCategory, Vec<(String, Box<dyn TextMatcher + Send + Sync>)>)>,
}

impl SkillsGapAnalyzer {
    pub fn new(categories: &[SkillCategoryConfig]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(categories.len());
        for config in categories {
            let mut matchers: Vec<(String, Box<dyn TextMatcher + Send + Sync>)> =
                Vec::with_capacity(config.skills.len());
            for skill in &config.skills {
                matchers.push((skill.clone(), Box::new(LiteralMatcher::new(skill)?)));
            }
            compiled.push((config.category, matchers));
        }
        Ok(Self {
            categories: compiled,
        })
    }

    /// A skill present in the resume is matched regardless of the job text;
    /// otherwise, if the job text mentions it, it is missing with a priority
    /// from the mention count (>2 high, >1 medium, else low). Skills absent
    /// from both texts appear in neither bucket.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> SkillsGap {
        let mut matched = SkillBuckets::default();
        let mut missing = SkillBuckets::default();
        let mut priorities = BTreeMap::new();

        for (category, matchers) in &self.categories {
            for (skill, matcher) in matchers {
                if matcher.is_present(resume_text) {
                    matched.bucket_mut(*category).push(skill.clone());
                } else if matcher.is_present(job_text) {
                    missing.bucket_mut(*category).push(skill.clone());
                    let mentions = matcher.mention_count(job_text);
                    let priority = if mentions > 2 {
                        Priority::High
                    } else if mentions > 1 {
                        Priority::Medium
                    } else {
                        Priority::Low
                    };
                    priorities.insert(skill.clone(), priority);
                }
            }
        }

        SkillsGap {
            matched,
            missing,
            priorities,
        }
    }
}
