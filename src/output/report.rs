//! Report structure wrapping an analysis result with generation metadata

use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete, serializable analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub resume_path: String,
    pub job_path: String,
}

impl AnalysisReport {
    pub fn new(analysis: AnalysisResult, resume_path: &Path, job_path: &Path) -> Self {
        Self {
            analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_path: resume_path.display().to_string(),
                job_path: job_path.display().to_string(),
            },
        }
    }
}
