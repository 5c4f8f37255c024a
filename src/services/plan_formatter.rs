use std::fmt;

/// One rendered line of a generated plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanBlock {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    ListItem(String),
    Gap,
    Paragraph(String),
}

impl PlanBlock {
    pub fn text(&self) -> Option<&str> {
        match self {
            PlanBlock::Heading1(text)
            | PlanBlock::Heading2(text)
            | PlanBlock::Heading3(text)
            | PlanBlock::ListItem(text)
            | PlanBlock::Paragraph(text) => Some(text),
            PlanBlock::Gap => None,
        }
    }

    fn from_line(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix("# ") {
            PlanBlock::Heading1(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("## ") {
            PlanBlock::Heading2(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("### ") {
            PlanBlock::Heading3(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("- ") {
            PlanBlock::ListItem(rest.to_string())
        } else if line.trim().is_empty() {
            PlanBlock::Gap
        } else {
            PlanBlock::Paragraph(line.to_string())
        }
    }
}

impl fmt::Display for PlanBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanBlock::Heading1(text) => write!(f, "{}\n{}", text, "=".repeat(text.chars().count())),
            PlanBlock::Heading2(text) => write!(f, "{}\n{}", text, "-".repeat(text.chars().count())),
            PlanBlock::Heading3(text) => write!(f, "{}", text.to_uppercase()),
            PlanBlock::ListItem(text) => write!(f, "  • {}", text),
            PlanBlock::Gap => Ok(()),
            PlanBlock::Paragraph(text) => write!(f, "{}", text),
        }
    }
}

/// Split generated text into blocks, one per line, in order.
pub fn format_plan(text: &str) -> Vec<PlanBlock> {
    text.split('\n')
        .map(|line| PlanBlock::from_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Render a plan as terminal-friendly plain text.
pub fn render_plain(blocks: &[PlanBlock]) -> String {
    blocks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
