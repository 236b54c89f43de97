//! Qualitative (LLM-backed) analysis. Transport is left to the caller through
//! `CompletionBackend`; this module owns prompts and response parsing.

pub mod prompts;
pub mod response;
pub mod analyzer;

pub use analyzer::{CompletionBackend, QualitativeAnalyzer, QualitativeInsights};
