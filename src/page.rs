//! Page composition: from a profile to wrapped rows with known section positions.
//!
//! Composition runs once per profile and terminal width. It fixes the section registry in
//! profile order and records where each section and each content block lands, so scrolling and
//! observation never have to re-measure text.

use crate::document::PageLayout;
use crate::error::Result;
use crate::geometry::Extent;
use crate::profile::{Block, Profile};
use crate::section::{SectionId, SectionRegistry};
use std::fs;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown instead of an avatar that cannot be read.
const AVATAR_PLACEHOLDER: [&str; 3] = ["+-------+", "|  (o)  |", "+-------+"];
const INDENT: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a row renders as.
pub enum LineKind {
    /// The person's name.
    Name,
    /// Tagline under the name.
    Headline,
    /// Text-art avatar row.
    Avatar,
    /// Section heading.
    SectionHeading,
    /// Block heading.
    BlockHeading,
    /// Subheading and period.
    Meta,
    /// Paragraph text.
    Body,
    /// Tag list.
    Tags,
    /// Spacing.
    Blank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One rendered row.
pub struct PageLine {
    /// Row text, already wrapped.
    pub text: String,
    /// Styling class.
    pub kind: LineKind,
    /// Section the row belongs to.
    pub section: SectionId,
    /// Index into [`Page::block_extents`] when the row is part of a content block.
    pub block: Option<usize>,
}

#[derive(Clone, Debug)]
/// A composed page.
pub struct Page {
    /// Rows top to bottom.
    pub lines: Vec<PageLine>,
    /// Sections in page order.
    pub registry: SectionRegistry,
    /// Section positions.
    pub layout: PageLayout,
    /// Position of every content block, in the order they appear.
    pub block_extents: Vec<Extent>,
}

impl Page {
    /// Lays the profile out at the given width.
    ///
    /// # Errors
    ///
    /// Returns an error when the profile has no sections or repeats one.
    pub fn compose(profile: &Profile, width: usize) -> Result<Self> {
        let registry = SectionRegistry::new(profile.section_ids())?;
        let width = width.max(20);
        let first = registry.first();

        let mut builder = Builder::default();
        builder.push(&profile.name, LineKind::Name, first);
        for line in wrap(&profile.headline, width) {
            builder.push(&line, LineKind::Headline, first);
        }
        if let Some(path) = &profile.avatar {
            builder.push("", LineKind::Blank, first);
            for line in load_avatar(path) {
                builder.push(&line, LineKind::Avatar, first);
            }
        }
        builder.push("", LineKind::Blank, first);

        let mut layout = PageLayout::new(0.0);
        for (i, section) in profile.sections.iter().enumerate() {
            // The prelude belongs to the first section so the page starts inside it.
            let start = if i == 0 { 0 } else { builder.lines.len() };
            builder.push(&section.heading().to_uppercase(), LineKind::SectionHeading, section.id);
            builder.push("", LineKind::Blank, section.id);
            for block in &section.blocks {
                builder.block(block, section.id, width);
            }
            let end = builder.lines.len();
            layout.insert(section.id, row_extent(start, end));
        }

        Ok(Self {
            lines: builder.lines,
            registry,
            layout,
            block_extents: builder.blocks,
        })
    }

    #[must_use]
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Default)]
struct Builder {
    lines: Vec<PageLine>,
    blocks: Vec<Extent>,
    current_block: Option<usize>,
}

impl Builder {
    fn push(&mut self, text: &str, kind: LineKind, section: SectionId) {
        self.lines.push(PageLine {
            text: text.to_string(),
            kind,
            section,
            block: self.current_block,
        });
    }

    fn block(&mut self, block: &Block, section: SectionId, width: usize) {
        let start = self.lines.len();
        self.current_block = Some(self.blocks.len());
        let inner = width.saturating_sub(INDENT.len());

        if !block.heading.is_empty() {
            self.push(&block.heading, LineKind::BlockHeading, section);
        }
        let meta: Vec<&str> = block
            .subheading
            .iter()
            .chain(block.period.iter())
            .map(String::as_str)
            .collect();
        if !meta.is_empty() {
            for line in wrap(&meta.join(" | "), width) {
                self.push(&line, LineKind::Meta, section);
            }
        }
        for paragraph in &block.body {
            for line in wrap(paragraph, inner) {
                self.push(&format!("{INDENT}{line}"), LineKind::Body, section);
            }
        }
        if !block.tags.is_empty() {
            let tags: Vec<String> = block.tags.iter().map(|t| format!("[{t}]")).collect();
            for line in wrap(&tags.join(" "), inner) {
                self.push(&format!("{INDENT}{line}"), LineKind::Tags, section);
            }
        }
        self.current_block = None;
        let end = self.lines.len();
        self.blocks.push(row_extent(start, end));
        self.push("", LineKind::Blank, section);
    }
}

#[allow(clippy::cast_precision_loss)]
fn row_extent(start: usize, end: usize) -> Extent {
    Extent::new(start as f64, end.saturating_sub(start) as f64)
}

/// Reads a text-art avatar, falling back to a placeholder when it cannot be loaded.
#[must_use]
pub fn load_avatar(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(art) => art.lines().map(str::to_string).collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "avatar unavailable, using placeholder");
            AVATAR_PLACEHOLDER.iter().map(|s| (*s).to_string()).collect()
        }
    }
}

/// Greedy word wrap measured in terminal columns. Words wider than the width are split, which
/// is also how unspaced scripts such as Chinese get broken into rows.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = split_at_column(word, width);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte offset of the longest prefix fitting in `width` columns. Always takes at least one
/// character, so a double-width character in a one-column row still makes progress.
fn split_at_column(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if i > 0 && used + w > width {
            return i;
        }
        used += w;
    }
    word.len()
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
