//! Integration tests for the resume analyzer

use resume_analyzer::config::Config;
use resume_analyzer::output::formatter::{JsonFormatter, OutputFormatter, TextFormatter};
use resume_analyzer::output::report::AnalysisReport;
use resume_analyzer::processing::analyzer::{AnalysisEngine, AnalysisRequest};
use resume_analyzer::processing::recommendations::CareerLevel;
use std::path::Path;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(Path::new("tests/fixtures").join(name)).unwrap()
}

fn fixture_request() -> AnalysisRequest {
    AnalysisRequest {
        resume_text: load_fixture("sample_resume.txt"),
        job_text: load_fixture("sample_job.txt"),
        career_level: Some(CareerLevel::Senior),
        target_industry: "technology".to_string(),
    }
}

#[test]
fn test_end_to_end_analysis() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let result = engine.analyze(&fixture_request()).unwrap();

    assert!(result.ats_score > 0 && result.ats_score <= 100);

    // Resume skills present in both texts are matched
    assert!(result.skills_gap.matched.technical.contains(&"Python".to_string()));
    assert!(result.skills_gap.matched.soft.contains(&"Leadership".to_string()));

    // Job-only skills are missing with priorities from mention counts
    assert!(result.skills_gap.missing.technical.contains(&"Kubernetes".to_string()));
    assert!(result.skills_gap.missing.technical.contains(&"Terraform".to_string()));

    assert!(!result.summary.is_empty());
    assert!(!result.suggestions.is_empty());
    assert!(result.suggestions.len() <= 6);
    assert!(result.quick_wins.len() <= 5);
    assert!(result.interview_questions.len() <= 9);
    assert!(result.salary_potential >= 60_000 && result.salary_potential <= 280_000);
}

#[test]
fn test_analysis_is_deterministic_across_engines() {
    let config = Config::default();
    let request = fixture_request();

    let first = AnalysisEngine::new(&config).unwrap().analyze(&request).unwrap();
    let second = AnalysisEngine::new(&config).unwrap().analyze(&request).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_senior_level_certification_difficulties() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let result = engine.analyze(&fixture_request()).unwrap();

    assert!(!result.certifications.is_empty());
    assert!(result.certifications.len() <= 6);
    for cert in &result.certifications {
        assert!(matches!(cert.difficulty.as_str(), "Intermediate" | "Advanced"));
    }

    // Ranked by salary lower bound, descending
    let bounds: Vec<u32> = result
        .certifications
        .iter()
        .map(|c| c.salary_lower_bound().unwrap())
        .collect();
    let mut sorted = bounds.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(bounds, sorted);
}

#[test]
fn test_heavily_mentioned_skill_drives_roadmap() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let result = engine.analyze(&fixture_request()).unwrap();

    // Kubernetes is mentioned three times in the job posting
    let phase_one = &result.learning_roadmap[0];
    assert!(phase_one.title.contains("Phase 1"));
    assert!(phase_one.skills.contains(&"Kubernetes".to_string()));

    // Certification phase is always last
    let last = result.learning_roadmap.last().unwrap();
    assert!(last.title.contains("Phase 3"));
}

#[test]
fn test_short_inputs_rejected() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();

    let mut request = fixture_request();
    request.resume_text = "too short".to_string();
    assert!(engine.analyze(&request).is_err());

    let mut request = fixture_request();
    request.job_text = "hiring".to_string();
    assert!(engine.analyze(&request).is_err());
}

#[test]
fn test_json_report_rendering() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let analysis = engine.analyze(&fixture_request()).unwrap();
    let report = AnalysisReport::new(
        analysis,
        Path::new("tests/fixtures/sample_resume.txt"),
        Path::new("tests/fixtures/sample_job.txt"),
    );

    let json = JsonFormatter::new(true).format_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["analysis"]["ats_score"].is_u64());
    assert!(value["analysis"]["skills_gap"]["missing"]["technical"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s == "Kubernetes"));
    assert_eq!(
        value["metadata"]["resume_path"],
        "tests/fixtures/sample_resume.txt"
    );
}

#[test]
fn test_text_report_rendering() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let analysis = engine.analyze(&fixture_request()).unwrap();
    let report = AnalysisReport::new(
        analysis,
        Path::new("tests/fixtures/sample_resume.txt"),
        Path::new("tests/fixtures/sample_job.txt"),
    );

    let text = TextFormatter::new().format_report(&report).unwrap();

    assert!(text.contains("RESUME ANALYSIS REPORT"));
    assert!(text.contains("EXECUTIVE SUMMARY"));
    assert!(text.contains("QUICK WINS"));
    assert!(text.contains("Salary Potential"));
}

#[test]
fn test_unknown_industry_is_accepted() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let mut request = fixture_request();
    request.target_industry = "agriculture".to_string();

    let result = engine.analyze(&request).unwrap();
    assert_eq!(result.interview_questions.len(), 9);
}
