//! Regex-driven formatting checks over raw resume text

use crate::error::{Result, ResumeAnalyzerError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// A named pattern check, supplied as configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingRule {
    pub name: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingCheck {
    pub name: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingScore {
    pub score: f64,
    /// Check results in configured rule order.
    pub checks: Vec<FormattingCheck>,
    pub passed_count: usize,
    pub total_checks: usize,
}

/// Runs a fixed battery of case-insensitive pattern checks.
#[derive(Debug)]
pub struct FormattingChecker {
    rules: Vec<(String, Regex)>,
}

impl FormattingChecker {
    /// Compiles every rule up front; a malformed pattern fails with the
    /// offending rule's name.
    pub fn new(rules: &[FormattingRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    ResumeAnalyzerError::Configuration(format!(
                        "Invalid pattern in formatting rule '{}': {}",
                        rule.name, e
                    ))
                })?;
            compiled.push((rule.name.clone(), regex));
        }
        Ok(Self { rules: compiled })
    }

    /// Boolean presence test per rule; score = passed / total (0 with no rules).
    pub fn check(&self, resume_text: &str) -> FormattingScore {
        let checks: Vec<FormattingCheck> = self
            .rules
            .iter()
            .map(|(name, regex)| FormattingCheck {
                name: name.clone(),
                passed: regex.is_match(resume_text),
            })
            .collect();

        let passed_count = checks.iter().filter(|check| check.passed).count();
        let total_checks = checks.len();
        let score = if total_checks > 0 {
            passed_count as f64 / total_checks as f64
        } else {
            0.0
        };

        FormattingScore {
            score,
            checks,
            passed_count,
            total_checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn checker() -> FormattingChecker {
        FormattingChecker::new(&Config::default().analysis.formatting_rules).unwrap()
    }

    #[test]
    fn test_all_rules_pass() {
        let resume = "Email: jane@example.com | Phone: 555-1234\n\
            Summary: experienced engineer\n\
            Experience:\n\
            • Developed services, increased throughput by 40%\n\
            Skills: Rust, SQL\n\
            Education: Bachelor of Science, State University";

        let score = checker().check(resume);

        assert_eq!(score.passed_count, score.total_checks);
        assert_eq!(score.score, 1.0);
    }

    #[test]
    fn test_no_rules_pass() {
        let score = checker().check("zzz qqq xxx");

        assert_eq!(score.passed_count, 0);
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_quantified_results_detects_percentages() {
        let score = checker().check("grew revenue by 20%");

        let quantified = score
            .checks
            .iter()
            .find(|check| check.name == "Quantified Results")
            .unwrap();
        assert!(quantified.passed);
    }

    #[test]
    fn test_check_order_matches_configuration() {
        let rules = Config::default().analysis.formatting_rules;
        let score = checker().check("anything");

        let names: Vec<&str> = score.checks.iter().map(|c| c.name.as_str()).collect();
        let expected: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_empty_rule_set_scores_zero() {
        let checker = FormattingChecker::new(&[]).unwrap();
        let score = checker.check("anything");

        assert_eq!(score.score, 0.0);
        assert_eq!(score.total_checks, 0);
    }

    #[test]
    fn test_malformed_pattern_identifies_rule() {
        let rules = vec![FormattingRule {
            name: "Broken Rule".to_string(),
            pattern: "(unclosed".to_string(),
        }];

        let err = FormattingChecker::new(&rules).unwrap_err();
        assert!(err.to_string().contains("Broken Rule"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let score = checker().check("EDUCATION: PHD");

        let education = score
            .checks
            .iter()
            .find(|check| check.name == "Education Section")
            .unwrap();
        assert!(education.passed);
    }
}
