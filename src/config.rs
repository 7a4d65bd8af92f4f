//! Configuration management for the resume analyzer
//!
//! Every catalog the engine consumes (stopwords, formatting rules, skill
//! categories, certifications, interview questions, scoring weights) lives
//! here and is passed explicitly into the engine at construction time.

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::formatting::FormattingRule;
use crate::processing::recommendations::Certification;
use crate::processing::scoring::ScoringWeights;
use crate::processing::skills_gap::{SkillCategory, SkillCategoryConfig};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub scoring: ScoringWeights,
    pub recommendations: RecommendationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Words excluded from tokenization.
    pub stopwords: Vec<String>,
    /// Ordered battery of formatting checks run against raw resume text.
    pub formatting_rules: Vec<FormattingRule>,
    /// Curated skill lists, one per category, order preserved for display.
    pub skill_categories: Vec<SkillCategoryConfig>,
    /// Minimum accepted input lengths in characters.
    pub min_resume_chars: usize,
    pub min_job_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Static certification catalog, filtered and ranked per analysis.
    pub certifications: Vec<Certification>,
    /// Base interview question bank.
    pub interview_questions: Vec<String>,
    /// Extra question appended when the target industry matches a key.
    pub industry_questions: BTreeMap<String, String>,
    /// Allowed certification difficulties per career level key.
    pub level_difficulty: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Text,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                stopwords: default_stopwords(),
                formatting_rules: default_formatting_rules(),
                skill_categories: default_skill_categories(),
                min_resume_chars: 100,
                min_job_chars: 50,
            },
            scoring: ScoringWeights::default(),
            recommendations: RecommendationConfig {
                certifications: default_certifications(),
                interview_questions: default_interview_questions(),
                industry_questions: default_industry_questions(),
                level_difficulty: default_level_difficulty(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the user config file, creating it with defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path, without touching the default location.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Fail fast on malformed catalogs so no rule can silently match nothing.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.analysis.formatting_rules {
            RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    ResumeAnalyzerError::Configuration(format!(
                        "Invalid pattern in formatting rule '{}': {}",
                        rule.name, e
                    ))
                })?;
        }

        for category in &self.analysis.skill_categories {
            for skill in &category.skills {
                if skill.trim().is_empty() {
                    return Err(ResumeAnalyzerError::Configuration(format!(
                        "Empty skill name in category '{}'",
                        category.category
                    )));
                }
            }
        }

        self.scoring.validate()?;

        for cert in &self.recommendations.certifications {
            if cert.salary_lower_bound().is_none() {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "Certification '{}' has an unparseable salary increase range: '{}'",
                    cert.name, cert.salary_increase
                )));
            }
        }

        Ok(())
    }
}

fn default_stopwords() -> Vec<String> {
    [
        "a", "an", "and", "the", "in", "on", "at", "for", "of", "to", "with", "is", "are", "was",
        "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will", "would",
        "could", "should", "may", "might", "must", "can", "shall",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_formatting_rules() -> Vec<FormattingRule> {
    [
        ("Contact Information Present", r"(email|@|phone|tel|linkedin|github)"),
        ("Professional Sections", r"(education|experience|work|employment|professional)"),
        ("Structured Format", r"[•|-]|\d+\."),
        ("Skills Section", r"(skills|technical|competencies|technologies)"),
        (
            "Action-Oriented Language",
            r"(managed|developed|created|implemented|improved|increased|achieved|led|built|designed)",
        ),
        ("Quantified Results", r"\d+%|\$\d+|\d+\+|increased|reduced|improved"),
        (
            "Education Section",
            r"(degree|university|college|bachelor|master|phd|certification)",
        ),
        ("Professional Summary", r"(summary|profile|objective|about)"),
    ]
    .iter()
    .map(|(name, pattern)| FormattingRule {
        name: name.to_string(),
        pattern: pattern.to_string(),
    })
    .collect()
}

fn default_skill_categories() -> Vec<SkillCategoryConfig> {
    vec![
        SkillCategoryConfig {
            category: SkillCategory::Technical,
            skills: [
                "JavaScript", "Python", "React", "Node.js", "SQL", "AWS", "Docker", "Git",
                "TypeScript", "GraphQL", "Kubernetes", "MongoDB", "PostgreSQL", "Redis",
                "Jenkins", "Terraform",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
        SkillCategoryConfig {
            category: SkillCategory::Soft,
            skills: [
                "Communication", "Leadership", "Problem Solving", "Teamwork", "Time Management",
                "Critical Thinking", "Adaptability", "Project Management", "Negotiation",
                "Presentation", "Mentoring", "Strategic Planning",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
        SkillCategoryConfig {
            category: SkillCategory::Industry,
            skills: [
                "Digital Marketing", "Financial Analysis", "Business Analysis", "UX/UI Design",
                "Data Visualization", "Content Strategy", "SEO", "Social Media", "E-commerce",
                "Customer Service", "Product Management", "Agile", "Scrum",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
    ]
}

fn default_certifications() -> Vec<Certification> {
    vec![
        Certification {
            name: "AWS Certified Solutions Architect".to_string(),
            provider: "Amazon Web Services".to_string(),
            difficulty: "Intermediate".to_string(),
            cost: "$150".to_string(),
            time_to_complete: "3-6 months".to_string(),
            prerequisites: vec![
                "Basic AWS knowledge".to_string(),
                "Cloud fundamentals".to_string(),
            ],
            salary_increase: "$25,000 - $40,000".to_string(),
            job_market_value: "Very High".to_string(),
            pass_rate: "65%".to_string(),
            validity_period: "3 years".to_string(),
            category: "Cloud Computing".to_string(),
            description: "Validates ability to design distributed systems on AWS platform with high availability and cost optimization.".to_string(),
        },
        Certification {
            name: "Project Management Professional (PMP)".to_string(),
            provider: "Project Management Institute".to_string(),
            difficulty: "Intermediate".to_string(),
            cost: "$555".to_string(),
            time_to_complete: "6-12 months".to_string(),
            prerequisites: vec!["4500 hours project management experience".to_string()],
            salary_increase: "$15,000 - $30,000".to_string(),
            job_market_value: "High".to_string(),
            pass_rate: "70%".to_string(),
            validity_period: "3 years".to_string(),
            category: "Project Management".to_string(),
            description: "Globally recognized certification for project management professionals across all industries.".to_string(),
        },
        Certification {
            name: "Google Cloud Professional".to_string(),
            provider: "Google Cloud".to_string(),
            difficulty: "Advanced".to_string(),
            cost: "$200".to_string(),
            time_to_complete: "4-8 months".to_string(),
            prerequisites: vec![
                "Cloud architecture experience".to_string(),
                "GCP fundamentals".to_string(),
            ],
            salary_increase: "$30,000 - $45,000".to_string(),
            job_market_value: "High".to_string(),
            pass_rate: "58%".to_string(),
            validity_period: "2 years".to_string(),
            category: "Cloud Computing".to_string(),
            description: "Professional-level certification for cloud architects and engineers working with Google Cloud Platform.".to_string(),
        },
        Certification {
            name: "Certified Information Systems Security Professional (CISSP)".to_string(),
            provider: "ISC2".to_string(),
            difficulty: "Advanced".to_string(),
            cost: "$725".to_string(),
            time_to_complete: "4-6 months".to_string(),
            prerequisites: vec!["5 years security experience".to_string()],
            salary_increase: "$25,000 - $40,000".to_string(),
            job_market_value: "Very High".to_string(),
            pass_rate: "55%".to_string(),
            validity_period: "3 years".to_string(),
            category: "Cybersecurity".to_string(),
            description: "Advanced cybersecurity certification for leadership roles in information security.".to_string(),
        },
    ]
}

fn default_interview_questions() -> Vec<String> {
    [
        "Tell me about a challenging project you worked on and how you overcame obstacles.",
        "How do you stay updated with the latest technology trends in your field?",
        "Describe your experience with version control systems and collaborative development.",
        "How would you handle a situation where you need to learn a new technology quickly?",
        "What's your approach to debugging complex issues in your code or processes?",
        "How do you ensure quality and maintainability in your work?",
        "Describe a time when you had to work with a difficult team member or stakeholder.",
        "What interests you most about this role and our company's mission?",
        "How do you approach learning new programming languages or technologies?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_industry_questions() -> BTreeMap<String, String> {
    let mut questions = BTreeMap::new();
    questions.insert(
        "technology".to_string(),
        "Describe your experience with agile development methodologies.".to_string(),
    );
    questions.insert(
        "finance".to_string(),
        "How do you ensure accuracy when handling financial data?".to_string(),
    );
    questions
}

fn default_level_difficulty() -> BTreeMap<String, Vec<String>> {
    let levels = [
        ("entry", vec!["Beginner", "Intermediate"]),
        ("mid", vec!["Beginner", "Intermediate", "Advanced"]),
        ("senior", vec!["Intermediate", "Advanced"]),
        ("lead", vec!["Advanced"]),
        ("executive", vec!["Advanced"]),
    ];

    levels
        .into_iter()
        .map(|(level, difficulties)| {
            (
                level.to_string(),
                difficulties.into_iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect()
}
