//! DOCX content extraction using docx-rs.
//!
//! Walks the document body in order and concatenates the raw text nodes of
//! paragraphs, hyperlinks and table cells.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, SourceFormat};
use crate::Extractor;
use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};

/// DOCX content extractor using docx-rs library.
///
/// Wraps synchronous docx-rs calls in spawn_blocking to avoid blocking the
/// async runtime.
#[derive(Debug, Clone)]
pub struct DocxExtractor {
    /// Join table cells with `|` per row instead of one line per cell.
    preserve_tables: bool,
    /// Collect heading-styled paragraphs into the outline.
    extract_headings: bool,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    /// Create new DOCX extractor with default settings.
    pub fn new() -> Self {
        Self {
            preserve_tables: true,
            extract_headings: true,
        }
    }

    /// Configure whether to preserve table structure.
    pub fn with_tables(mut self, preserve: bool) -> Self {
        self.preserve_tables = preserve;
        self
    }

    /// Configure whether to collect headings into the outline.
    pub fn with_headings(mut self, extract: bool) -> Self {
        self.extract_headings = extract;
        self
    }

    fn extract_sync(
        content: Vec<u8>,
        preserve_tables: bool,
        extract_headings: bool,
    ) -> ExtractResult<(String, Vec<String>)> {
        let docx = docx_rs::read_docx(&content)
            .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

        let mut text_parts: Vec<String> = Vec::new();
        let mut headings: Vec<String> = Vec::new();

        for child in docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => {
                    let para_text = Self::paragraph_text(&p);
                    if para_text.trim().is_empty() {
                        continue;
                    }

                    if extract_headings && Self::is_heading(&p) {
                        headings.push(para_text.trim().to_string());
                    }
                    text_parts.push(para_text);
                }
                DocumentChild::Table(t) => {
                    if preserve_tables {
                        let table_text = Self::table_text(&t);
                        if !table_text.trim().is_empty() {
                            text_parts.push(table_text);
                        }
                    } else {
                        text_parts.extend(
                            Self::table_cells(&t)
                                .into_iter()
                                .filter(|cell| !cell.is_empty()),
                        );
                    }
                }
                // bookmarks, section properties, etc.
                _ => {}
            }
        }

        Ok((text_parts.join("\n"), headings))
    }

    fn is_heading(p: &docx_rs::Paragraph) -> bool {
        p.property.style.as_ref().is_some_and(|style| {
            let style_id = style.val.to_lowercase();
            style_id.starts_with("heading") || style_id.contains("title")
        })
    }

    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => Self::push_run(&mut text, r),
                ParagraphChild::Hyperlink(h) => {
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            Self::push_run(&mut text, r);
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }

    fn push_run(text: &mut String, run: &docx_rs::Run) {
        for run_child in &run.children {
            match run_child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }

    /// Cell texts row by row, trimmed.
    fn table_rows(t: &docx_rs::Table) -> Vec<Vec<String>> {
        t.rows
            .iter()
            .map(|row| {
                let TableChild::TableRow(r) = row;
                r.cells
                    .iter()
                    .map(|cell| {
                        let TableRowChild::TableCell(c) = cell;
                        c.children
                            .iter()
                            .filter_map(|child| match child {
                                TableCellContent::Paragraph(p) => Some(Self::paragraph_text(p)),
                                _ => None,
                            })
                            .filter(|para| !para.is_empty())
                            .collect::<Vec<_>>()
                            .join(" ")
                            .trim()
                            .to_string()
                    })
                    .collect()
            })
            .collect()
    }

    fn table_cells(t: &docx_rs::Table) -> Vec<String> {
        Self::table_rows(t).into_iter().flatten().collect()
    }

    fn table_text(t: &docx_rs::Table) -> String {
        Self::table_rows(t)
            .iter()
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();
        let content_len = content.len();
        let preserve_tables = self.preserve_tables;
        let extract_headings = self.extract_headings;

        let (text, headings) = tokio::task::spawn_blocking(move || {
            Self::extract_sync(content, preserve_tables, extract_headings)
        })
        .await??;

        Ok(ExtractedContent::new(text, SourceFormat::Docx)
            .with_headings(headings)
            .with_metadata("original_size", content_len))
    }

    fn supported_types(&self) -> &[&str] {
        &[
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "application/docx",
        ]
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".docx"]
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}
