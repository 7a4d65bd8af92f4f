//! Analysis pipeline: tokenization, matching, scoring, and recommendations

pub mod analyzer;
pub mod formatting;
pub mod keyword_matcher;
pub mod recommendations;
pub mod scoring;
pub mod skills_gap;
pub mod tokenizer;
