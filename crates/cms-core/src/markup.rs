//! Content markup parser
//!
//! The grammar is line based and deliberately tiny:
//! - `# text`  → level-1 heading
//! - `## text` → level-2 heading
//! - any other non-blank line → paragraph
//!
//! Lines are trimmed before matching and blank lines are dropped. There are
//! no lists, emphasis, links or nesting.

use serde::{Deserialize, Serialize};

/// One rendered block of page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading1(String),
    Heading2(String),
    Paragraph(String),
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Block::Heading1(text) | Block::Heading2(text) | Block::Paragraph(text) => text,
        }
    }
}

/// Split content into blocks, preserving line order
pub fn parse_content(content: &str) -> Vec<Block> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Block> {
    let line = line.trim();
    if let Some(text) = line.strip_prefix("# ") {
        Some(Block::Heading1(text.to_string()))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some(Block::Heading2(text.to_string()))
    } else if line.is_empty() {
        None
    } else {
        Some(Block::Paragraph(line.to_string()))
    }
}
