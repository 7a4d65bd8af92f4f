//! Resume analyzer: ATS-style resume and job description analysis tool

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::error::{Result, ResumeAnalyzerError};
use resume_analyzer::output::formatter;
use resume_analyzer::output::report::AnalysisReport;
use resume_analyzer::processing::analyzer::{AnalysisEngine, AnalysisRequest};
use std::process;
use std::time::Duration;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            career_level,
            industry,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            let resume_text = std::fs::read_to_string(&resume)?;
            let job_text = std::fs::read_to_string(&job)?;
            info!(
                "Loaded {} resume characters, {} job description characters",
                resume_text.chars().count(),
                job_text.chars().count()
            );

            let engine = AnalysisEngine::new(&config)?;
            let request = AnalysisRequest {
                resume_text,
                job_text,
                career_level,
                target_industry: industry,
            };

            let progress = analysis_progress();
            let steps = [
                "Parsing resume content...",
                "Extracting keywords...",
                "Comparing with job requirements...",
                "Calculating ATS compatibility...",
                "Generating recommendations...",
            ];
            for step in steps {
                progress.set_message(step);
                progress.tick();
            }
            let analysis = engine.analyze(&request)?;
            progress.finish_and_clear();

            let report = AnalysisReport::new(analysis, &resume, &job);

            let use_colors = config.output.color_output && save.is_none();
            let formatter = formatter::formatter_for(&output_format, use_colors, detailed);
            let rendered = formatter.format_report(&report)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeAnalyzerError::Configuration(format!(
                        "Failed to serialize config: {}",
                        e
                    ))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

fn analysis_progress() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
