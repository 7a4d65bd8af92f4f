//! CLI interface for the resume analyzer

use crate::processing::recommendations::CareerLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "ATS-style resume and job description analysis tool")]
#[command(
    long_about = "Score resume compatibility with a job description using keyword matching, formatting checks, and skills gap analysis, and generate improvement recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Career level, used to filter certification recommendations
        #[arg(short = 'l', long, value_enum)]
        career_level: Option<CareerLevel>,

        /// Target industry, used for certification and interview tailoring
        #[arg(short, long, default_value = "")]
        industry: String,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, text
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "text" | "txt" => Ok(crate::config::OutputFormat::Text),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, text",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert!(matches!(
            parse_output_format("console"),
            Ok(OutputFormat::Console)
        ));
        assert!(matches!(parse_output_format("JSON"), Ok(OutputFormat::Json)));
        assert!(matches!(parse_output_format("txt"), Ok(OutputFormat::Text)));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["txt", "md"];
        assert!(validate_file_extension(&PathBuf::from("resume.txt"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.MD"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.pdf"), &allowed).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &allowed).is_err());
    }
}
