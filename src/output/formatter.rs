//! Formatters rendering an analysis report for console, JSON, and plain text

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};

/// Renders a report into a complete output string for one format.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Text => Box::new(TextFormatter::new()),
    }
}

/// Colored terminal output with score-tier highlighting.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u8) -> Color {
        if score >= 80 {
            Color::Green
        } else if score >= 60 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn header(&self, title: &str) -> String {
        format!(
            "\n{}\n{}\n",
            self.colorize(title, Color::Cyan),
            "─".repeat(title.chars().count())
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.header("📊 RESUME ANALYSIS"));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        let score_text = format!("{}%", analysis.ats_score);
        output.push_str(&format!(
            "\nATS Compatibility Score: {}\n",
            self.colorize(&score_text, Self::score_color(analysis.ats_score))
        ));
        output.push_str(&format!(
            "Keyword match: {:.0}%  |  Formatting: {}/{}  |  Skills matched: {}\n",
            analysis.keyword_match.score * 100.0,
            analysis.formatting_score.passed_count,
            analysis.formatting_score.total_checks,
            analysis.skills_gap.matched.total()
        ));

        output.push_str(&self.header("Executive Summary"));
        output.push_str(&analysis.summary);
        output.push('\n');

        output.push_str(&self.header("Skills Gap"));
        if analysis.skills_gap.missing.total() == 0 {
            output.push_str("No missing skills identified.\n");
        } else {
            for skill in analysis.skills_gap.missing.technical.iter()
                .chain(analysis.skills_gap.missing.soft.iter())
                .chain(analysis.skills_gap.missing.industry.iter())
            {
                let priority = analysis
                    .skills_gap
                    .priorities
                    .get(skill)
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "low".to_string());
                output.push_str(&format!("  • {} ({} priority)\n", skill, priority));
            }
        }

        output.push_str(&self.header("Suggestions"));
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        output.push_str(&self.header("Quick Wins"));
        for win in &analysis.quick_wins {
            output.push_str(&format!("  {}\n", win));
        }

        if !analysis.certifications.is_empty() {
            output.push_str(&self.header("Recommended Certifications"));
            for cert in &analysis.certifications {
                output.push_str(&format!(
                    "  • {} ({}) — {}\n",
                    cert.name, cert.provider, cert.salary_increase
                ));
                if self.detailed {
                    output.push_str(&format!(
                        "    {} | {} | pass rate {}\n",
                        cert.difficulty, cert.time_to_complete, cert.pass_rate
                    ));
                }
            }
        }

        if self.detailed {
            output.push_str(&self.header("Learning Roadmap"));
            for phase in &analysis.learning_roadmap {
                output.push_str(&format!("  {}\n", phase.title));
                output.push_str(&format!("    Skills: {}\n", phase.skills.join(", ")));
                output.push_str(&format!(
                    "    {} via {} — {}\n",
                    phase.time_frame, phase.platform, phase.outcome
                ));
            }

            output.push_str(&self.header("Interview Preparation"));
            for (i, question) in analysis.interview_questions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, question));
            }
        }

        output.push_str(&format!(
            "\nEstimated salary potential: {}\n",
            self.colorize(
                &format!("${}K", analysis.salary_potential / 1000),
                Color::Green
            )
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// Structured output for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Plain-text report suitable for saving to a file.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn divider() -> String {
        "=".repeat(50)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("RESUME ANALYSIS REPORT\n");
        output.push_str(&Self::divider());
        output.push('\n');
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!("Resume: {}\n", report.metadata.resume_path));
        output.push_str(&format!("Job: {}\n\n", report.metadata.job_path));

        output.push_str(&format!("ATS SCORE: {}%\n\n", analysis.ats_score));

        output.push_str("EXECUTIVE SUMMARY\n");
        output.push_str(&Self::divider());
        output.push('\n');
        output.push_str(&analysis.summary);
        output.push_str("\n\n");

        output.push_str("SKILLS ANALYSIS\n");
        output.push_str(&Self::divider());
        output.push('\n');
        output.push_str(&format!(
            "Matched skills: {}\n",
            analysis.skills_gap.matched.total()
        ));
        output.push_str(&format!(
            "Missing skills: {}\n\n",
            analysis.skills_gap.missing.total()
        ));

        output.push_str("RECOMMENDATIONS\n");
        output.push_str(&Self::divider());
        output.push('\n');
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }
        output.push('\n');

        output.push_str("QUICK WINS\n");
        output.push_str(&Self::divider());
        output.push('\n');
        for win in &analysis.quick_wins {
            output.push_str(&format!("- {}\n", win));
        }
        output.push('\n');

        output.push_str("CERTIFICATION RECOMMENDATIONS\n");
        output.push_str(&Self::divider());
        output.push('\n');
        if analysis.certifications.is_empty() {
            output.push_str("None identified for this role.\n");
        } else {
            for cert in &analysis.certifications {
                output.push_str(&format!(
                    "- {} ({}): {}\n",
                    cert.name, cert.provider, cert.salary_increase
                ));
            }
        }
        output.push('\n');

        output.push_str(&format!(
            "Salary Potential: ${}K\n",
            analysis.salary_potential / 1000
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::report::AnalysisReport;
    use crate::processing::analyzer::{AnalysisEngine, AnalysisRequest};
    use std::path::PathBuf;

    fn sample_report() -> AnalysisReport {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let request = AnalysisRequest {
            resume_text: "Jane Doe, jane@example.com. Summary: Python developer. \
                Experience: developed services with Docker and Git, improved latency by 30%. \
                Skills: Python, Docker, Git. Education: Bachelor of Science."
                .to_string(),
            job_text: "Senior Python engineer wanted. Kubernetes, Kubernetes, Kubernetes, \
                AWS, and Terraform required."
                .to_string(),
            career_level: None,
            target_industry: "technology".to_string(),
        };
        let analysis = engine.analyze(&request).unwrap();
        AnalysisReport::new(
            analysis,
            &PathBuf::from("resume.txt"),
            &PathBuf::from("job.txt"),
        )
    }

    #[test]
    fn test_console_output_contains_core_sections() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("ATS Compatibility Score"));
        assert!(output.contains("Executive Summary"));
        assert!(output.contains("Quick Wins"));
        assert!(output.contains("Kubernetes"));
    }

    #[test]
    fn test_console_detailed_adds_roadmap_and_questions() {
        let report = sample_report();
        let brief = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();
        let detailed = ConsoleFormatter::new(false, true)
            .format_report(&report)
            .unwrap();

        assert!(!brief.contains("Learning Roadmap"));
        assert!(detailed.contains("Learning Roadmap"));
        assert!(detailed.contains("Interview Preparation"));
    }

    #[test]
    fn test_console_without_colors_has_no_escape_codes() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_is_valid() {
        let output = JsonFormatter::new(true)
            .format_report(&sample_report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["analysis"]["ats_score"].is_u64());
        assert!(value["metadata"]["analyzer_version"].is_string());
    }

    #[test]
    fn test_text_output_has_fixed_sections() {
        let output = TextFormatter::new()
            .format_report(&sample_report())
            .unwrap();

        for section in [
            "EXECUTIVE SUMMARY",
            "SKILLS ANALYSIS",
            "RECOMMENDATIONS",
            "QUICK WINS",
            "CERTIFICATION RECOMMENDATIONS",
            "Salary Potential",
        ] {
            assert!(output.contains(section), "missing section {}", section);
        }
    }
}
