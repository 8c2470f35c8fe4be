//! Subcommand execution.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use doclens_core::source::mime_type_for;
use doclens_core::{DirectorySource, DocumentAnalyzer, DocumentSearch, DocumentSource, QaConfig};
use serde::Serialize;

use crate::cli::Commands;

/// Load configuration from an explicit file, the default file, or the
/// environment, in that order.
pub fn load_config(path: Option<&Path>) -> Result<QaConfig> {
    if let Some(path) = path {
        return QaConfig::from_file(path).with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let default_path = QaConfig::default_path();
    if default_path.exists() {
        tracing::debug!(path = %default_path.display(), "Using default config file");
        return QaConfig::from_file(&default_path)
            .with_context(|| format!("Failed to load config from {}", default_path.display()));
    }

    QaConfig::from_env().context("Invalid DOCLENS_* environment configuration")
}

pub async fn run(command: Commands, config: QaConfig, json: bool) -> Result<()> {
    let analyzer = Arc::new(DocumentAnalyzer::new(config));

    match command {
        Commands::Ask { file, question } => {
            let (name, text) = read_document(&analyzer, &file).await?;
            let result = analyzer.answer_question(&question, &text, &name);
            if json {
                print_json(&result)?;
            } else {
                println!("{}", result.answer);
                if result.is_found() {
                    println!("\nConfidence: {:.2}", result.confidence);
                    println!("Sources: {}", result.sources.join(", "));
                }
            }
        }
        Commands::Search { question, dir, recent } => {
            let source = DirectorySource::new(&dir);
            let search = DocumentSearch::new(analyzer.clone());
            let outcome = match recent {
                Some(limit) => {
                    let documents = source.recent(limit).await?;
                    search.search_documents(&question, &source, &documents).await?
                }
                None => search.search(&question, &source).await?,
            };
            if json {
                print_json(&outcome)?;
            } else {
                println!("{}", outcome.answer.answer);
                if let Some(name) = &outcome.answer.document_name {
                    println!("\nBest match: {} (confidence {:.2})", name, outcome.answer.confidence);
                }
                println!(
                    "Searched {} documents, skipped {}{}",
                    outcome.searched,
                    outcome.skipped,
                    if outcome.timed_out { ", stopped at time limit" } else { "" }
                );
            }
        }
        Commands::Recent { dir, limit } => {
            let documents = DirectorySource::new(&dir).recent(limit).await?;
            if json {
                print_json(&documents)?;
            } else if documents.is_empty() {
                println!("No documents in {}", dir.display());
            } else {
                for (i, doc) in documents.iter().enumerate() {
                    println!("{}. {} ({})", i + 1, doc.name, doc.mime_type);
                }
            }
        }
        Commands::Summarize { file } => {
            let (name, text) = read_document(&analyzer, &file).await?;
            let result = analyzer.generate_summary_enhanced(&text, &name).await;
            if json {
                print_json(&result)?;
            } else {
                println!("{}", result.summary);
            }
        }
        Commands::Insights { file } => {
            let (name, text) = read_document(&analyzer, &file).await?;
            let result = analyzer.generate_insights_enhanced(&text, &name).await;
            if json {
                print_json(&result)?;
            } else {
                println!("{}", result.insights);
            }
        }
        Commands::Info { file } => {
            let (name, text) = read_document(&analyzer, &file).await?;
            let info = analyzer.key_info(&text, &name);
            if json {
                print_json(&info)?;
            } else {
                println!("Document: {}", info.document_name);
                println!("Words: {}", info.word_count);
                println!("Paragraphs: {}", info.paragraphs);
                println!(
                    "Contains numbers: {}, dates: {}, emails: {}",
                    info.has_numbers, info.has_dates, info.has_emails
                );
                if !info.top_keywords.is_empty() {
                    let keywords: Vec<String> = info
                        .top_keywords
                        .iter()
                        .map(|k| format!("{} ({})", k.word, k.count))
                        .collect();
                    println!("Top keywords: {}", keywords.join(", "));
                }
            }
        }
        Commands::Extract { file } => {
            let (_, text) = read_document(&analyzer, &file).await?;
            if json {
                print_json(&serde_json::json!({ "text": text }))?;
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}

/// Read a file and extract its text, returning `(file name, text)`.
async fn read_document(analyzer: &DocumentAnalyzer, path: &Path) -> Result<(String, String)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let text = analyzer.extract_text(&bytes, mime_type_for(&name), &name).await?;
    if text.trim().is_empty() {
        tracing::warn!(file = %name, "No text could be extracted");
    }
    Ok((name, text))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
