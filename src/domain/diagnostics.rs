//! Fatal diagnostic extraction from typesetting engine output.
//!
//! The engine reports unrecoverable problems on lines starting with `!`,
//! followed by the offending input and help text. Each such line is kept
//! together with the lines after it. Windows that touch or overlap merge into
//! a single block, and separate blocks are rendered with a `--` line between
//! them.

use crossterm::style::Stylize;

/// Prefix of a fatal engine diagnostic.
pub const FATAL_MARKER: char = '!';

/// Lines of trailing context kept after each fatal line.
pub const DEFAULT_CONTEXT_LINES: usize = 200;

const BLOCK_SEPARATOR: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Fatal,
    Context,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticLine<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

/// Contiguous run of output lines around one or more fatal lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBlock<'a> {
    pub lines: Vec<DiagnosticLine<'a>>,
}

impl DiagnosticBlock<'_> {
    pub fn fatal_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter(|line| line.kind == LineKind::Fatal).map(|line| line.text)
    }
}

pub fn is_fatal_line(line: &str) -> bool {
    line.starts_with(FATAL_MARKER)
}

/// Collect every fatal line in `output` along with up to `context_lines`
/// lines following it.
pub fn extract_fatal_errors(output: &str, context_lines: usize) -> Vec<DiagnosticBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<DiagnosticBlock<'_>> = None;
    let mut remaining = 0usize;

    for line in output.lines() {
        if is_fatal_line(line) {
            current
                .get_or_insert_with(DiagnosticBlock::default)
                .lines
                .push(DiagnosticLine { kind: LineKind::Fatal, text: line });
            remaining = context_lines;
        } else if remaining > 0 {
            if let Some(block) = current.as_mut() {
                block.lines.push(DiagnosticLine { kind: LineKind::Context, text: line });
            }
            remaining -= 1;
        } else if let Some(block) = current.take() {
            blocks.push(block);
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}

/// Render extracted blocks for the console, one line per output line.
///
/// With `color` set, fatal lines are bold red and separators cyan.
pub fn render_blocks(blocks: &[DiagnosticBlock<'_>], color: bool) -> String {
    let mut rendered = String::new();

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            if color {
                rendered.push_str(&BLOCK_SEPARATOR.cyan().to_string());
            } else {
                rendered.push_str(BLOCK_SEPARATOR);
            }
            rendered.push('\n');
        }

        for line in &block.lines {
            match line.kind {
                LineKind::Fatal if color => {
                    rendered.push_str(&line.text.red().bold().to_string());
                }
                _ => rendered.push_str(line.text),
            }
            rendered.push('\n');
        }
    }

    rendered
}
