//! Page layout and cursor management.
//!
//! [`PageComposer`] owns the document writer and a vertical cursor. Every
//! drawing helper first claims the space it needs via
//! [`ensure_space`](PageComposer::ensure_space); when the remaining space on
//! the page is too small, the current page is sealed and a continuation
//! page is opened with its running chrome (brand mark, page number,
//! separator) before the helper draws. Callers never place content across a
//! page boundary by accident.
//!
//! All coordinates are PDF points with the origin at the bottom-left.

use crate::error::Result;
use crate::fonts;
use crate::writer::{Color, ContentStreamBuilder, PdfWriter};

/// A4 page width in points.
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 page height in points.
pub const PAGE_HEIGHT: f32 = 842.0;
/// Left content margin.
pub const MARGIN_LEFT: f32 = 50.0;
/// Right content margin.
pub const MARGIN_RIGHT: f32 = 50.0;
/// Cursor position at the top of a fresh content area.
pub const CONTENT_TOP: f32 = 780.0;
/// Content must not be drawn below this line.
pub const MARGIN_BOTTOM: f32 = 60.0;
/// Usable width between the margins.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

/// Body text size in points.
pub const BODY_SIZE: f32 = 10.0;
/// Vertical distance between body baselines.
pub const BODY_LEADING: f32 = 14.0;
/// Section title size.
const SECTION_TITLE_SIZE: f32 = 16.0;
/// Subsection label size.
const LABEL_SIZE: f32 = 11.0;
/// Caption and footnote size.
const SMALL_SIZE: f32 = 8.0;

/// Default body ink.
pub const TEXT: Color = Color::rgb(0.122, 0.161, 0.216);
/// Secondary text (captions, notes, page numbers).
pub const MUTED: Color = Color::rgb(0.420, 0.447, 0.502);
/// Hairline separators.
pub const RULE: Color = Color::rgb(0.898, 0.906, 0.922);
/// Card background tint.
pub const CARD_BG: Color = Color::rgb(0.976, 0.980, 0.984);
/// Cover page background.
pub const COVER_BG: Color = Color::rgb(0.067, 0.094, 0.153);
/// White, used on dark backgrounds.
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// The three faces available to the layout, mapped to page font resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Helvetica-Oblique
    Italic,
}

impl Font {
    /// Font resource name in the page resource dictionary.
    pub fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
        }
    }

    /// Whether widths should use the bold factor. The oblique face shares
    /// regular advances.
    pub fn is_bold(self) -> bool {
        matches!(self, Font::Bold)
    }
}

/// Width of the filled part of a percentage bar.
///
/// Proportional to the percentage over the full track, clamped to a
/// visibility floor so tiny values still show a sliver, and never wider
/// than the track itself.
pub fn bar_fill_width(pct: u8, track: f32, floor: f32) -> f32 {
    ((pct as f32) * track / 100.0).max(floor).min(track)
}

/// Washed-out variant of an accent color, used for label backgrounds.
fn tint(accent: Color) -> Color {
    let mix = |c: f32| c + (1.0 - c) * 0.88;
    Color::rgb(mix(accent.r), mix(accent.g), mix(accent.b))
}

/// Cursor-driven page composer.
pub struct PageComposer {
    writer: PdfWriter,
    current: ContentStreamBuilder,
    y: f32,
    page_no: u32,
    brand: String,
    bar_floor: f32,
}

impl PageComposer {
    /// Start a document with one blank page and the cursor at the top.
    ///
    /// The first page carries no chrome; it is normally used as a cover and
    /// drawn through [`content`](PageComposer::content).
    pub fn new(brand: &str, bar_floor: f32) -> Self {
        Self {
            writer: PdfWriter::new(),
            current: ContentStreamBuilder::new(),
            y: CONTENT_TOP,
            page_no: 1,
            brand: brand.to_string(),
            bar_floor,
        }
    }

    /// Current cursor position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current page number, starting at 1.
    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    /// Direct access to the current page's content stream.
    pub fn content(&mut self) -> &mut ContentStreamBuilder {
        &mut self.current
    }

    /// Move the cursor to an absolute position on the current page.
    pub fn set_cursor(&mut self, y: f32) {
        self.y = y;
    }

    /// Move the cursor down.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Guarantee vertical room for a block of the given height.
    ///
    /// When the block would cross the bottom margin the current page is
    /// sealed and a continuation page opened, so the block lands whole on
    /// the new page.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN_BOTTOM {
            self.new_page();
        }
    }

    /// Seal the current page and open a continuation page with chrome.
    pub fn new_page(&mut self) {
        let sealed = std::mem::take(&mut self.current);
        self.writer.push_page(PAGE_WIDTH, PAGE_HEIGHT, sealed);
        self.page_no += 1;
        self.y = CONTENT_TOP;

        // Running header: brand mark, page number, hairline separator
        let brand = self.brand.clone();
        let page_label = format!("Page {}", self.page_no);
        self.text_at(&brand, Font::Bold, 9.0, MUTED, MARGIN_LEFT, 806.0);
        self.text_right(&page_label, Font::Regular, 9.0, MUTED, PAGE_WIDTH - MARGIN_RIGHT, 806.0);
        self.current
            .stroke_color(RULE)
            .line_width(0.5)
            .line(MARGIN_LEFT, 798.0, PAGE_WIDTH - MARGIN_RIGHT, 798.0)
            .stroke();
    }

    /// Show one line of text with its left edge at `x`.
    pub fn text_at(&mut self, text: &str, font: Font, size: f32, color: Color, x: f32, y: f32) {
        self.current.fill_color(color).text(text, font.resource(), size, x, y);
    }

    /// Show one line of text with its right edge at `right`.
    pub fn text_right(
        &mut self,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
        right: f32,
        y: f32,
    ) {
        let width = fonts::string_width(text, size, font.is_bold());
        self.text_at(text, font, size, color, right - width, y);
    }

    /// Show one line of text centered on `center`.
    pub fn text_centered(
        &mut self,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
        center: f32,
        y: f32,
    ) {
        let width = fonts::string_width(text, size, font.is_bold());
        self.text_at(text, font, size, color, center - width / 2.0, y);
    }

    /// Numbered section header: accent badge with the section number, bold
    /// title, short accent underline.
    pub fn section_header(&mut self, number: u32, title: &str, accent: Color) {
        self.ensure_space(48.0);
        let y = self.y;

        self.current.fill_color(accent).circle(MARGIN_LEFT + 9.0, y - 5.0, 9.0).fill();
        let label = number.to_string();
        self.text_centered(&label, Font::Bold, 10.0, WHITE, MARGIN_LEFT + 9.0, y - 8.5);
        self.text_at(title, Font::Bold, SECTION_TITLE_SIZE, TEXT, MARGIN_LEFT + 26.0, y - 10.0);
        self.current.fill_color(accent).rect(MARGIN_LEFT + 26.0, y - 16.0, 30.0, 2.0).fill();

        self.y = y - 34.0;
    }

    /// Subsection label: bold text over a full-width band tinted in the
    /// section accent, with a stronger accent edge at the left.
    pub fn subsection_label(&mut self, label: &str, accent: Color) {
        self.ensure_space(28.0);
        let y = self.y;
        self.current
            .fill_color(tint(accent))
            .rect(MARGIN_LEFT, y - 12.0, CONTENT_WIDTH, 16.0)
            .fill();
        self.current.fill_color(accent).rect(MARGIN_LEFT, y - 12.0, 3.0, 16.0).fill();
        self.text_at(label, Font::Bold, LABEL_SIZE, TEXT, MARGIN_LEFT + 9.0, y - 8.0);
        self.y = y - 22.0;
    }

    /// Body paragraph, wrapped to the content width.
    pub fn paragraph(&mut self, text: &str) {
        self.paragraph_in(text, Font::Regular, TEXT);
    }

    /// Secondary paragraph in the oblique face.
    pub fn italic_paragraph(&mut self, text: &str) {
        self.paragraph_in(text, Font::Italic, MUTED);
    }

    fn paragraph_in(&mut self, text: &str, font: Font, color: Color) {
        let lines = fonts::wrap(text, CONTENT_WIDTH, BODY_SIZE, font.is_bold());
        for line in lines {
            self.ensure_space(BODY_LEADING);
            let y = self.y;
            self.text_at(&line, font, BODY_SIZE, color, MARGIN_LEFT, y - BODY_SIZE);
            self.y = y - BODY_LEADING;
        }
        self.y -= 4.0;
    }

    /// Bulleted item: accent dot plus hanging-indent body text.
    pub fn bullet(&mut self, text: &str, accent: Color) {
        let indent = 14.0;
        let lines = fonts::wrap(text, CONTENT_WIDTH - indent, BODY_SIZE, false);
        if lines.is_empty() {
            return;
        }
        // Keep the dot and the first line together
        self.ensure_space(BODY_LEADING);
        let y = self.y;
        self.current.fill_color(accent).circle(MARGIN_LEFT + 3.5, y - 6.5, 1.8).fill();
        self.text_at(&lines[0], Font::Regular, BODY_SIZE, TEXT, MARGIN_LEFT + indent, y - BODY_SIZE);
        self.y = y - BODY_LEADING;

        for line in &lines[1..] {
            self.ensure_space(BODY_LEADING);
            let y = self.y;
            self.text_at(line, Font::Regular, BODY_SIZE, TEXT, MARGIN_LEFT + indent, y - BODY_SIZE);
            self.y = y - BODY_LEADING;
        }
        self.y -= 2.0;
    }

    /// Advice card: accent edge bar, bold heading, optional oblique
    /// rationale underneath. The whole card stays on one page.
    pub fn advice_card(&mut self, heading: &str, why: Option<&str>, accent: Color) {
        let indent = 12.0;
        let heading_lines = fonts::wrap(heading, CONTENT_WIDTH - indent, BODY_SIZE, true);
        let why_lines = match why {
            Some(w) => fonts::wrap(w, CONTENT_WIDTH - indent, BODY_SIZE, false),
            None => Vec::new(),
        };
        let line_count = heading_lines.len() + why_lines.len();
        if line_count == 0 {
            return;
        }
        let height = line_count as f32 * BODY_LEADING + 10.0;
        self.ensure_space(height + 6.0);

        let top = self.y;
        self.current.fill_color(accent).rect(MARGIN_LEFT, top - height, 3.0, height).fill();

        let mut baseline = top - 5.0 - BODY_SIZE;
        for line in &heading_lines {
            self.text_at(line, Font::Bold, BODY_SIZE, TEXT, MARGIN_LEFT + indent, baseline);
            baseline -= BODY_LEADING;
        }
        for line in &why_lines {
            self.text_at(line, Font::Italic, BODY_SIZE, MUTED, MARGIN_LEFT + indent, baseline);
            baseline -= BODY_LEADING;
        }

        self.y = top - height - 8.0;
    }

    /// Compatibility card: shaded rounded box with a bold label on the
    /// left, the rating on the right, and an optional note underneath.
    pub fn compat_card(&mut self, label: &str, value: &str, note: Option<&str>) {
        let height = if note.is_some() { 44.0 } else { 30.0 };
        self.ensure_space(height + 8.0);
        let top = self.y;

        self.current
            .fill_color(CARD_BG)
            .rounded_rect(MARGIN_LEFT, top - height, CONTENT_WIDTH, height, 6.0)
            .fill();

        self.text_at(label, Font::Bold, LABEL_SIZE, TEXT, MARGIN_LEFT + 12.0, top - 19.0);
        self.text_right(
            value,
            Font::Bold,
            LABEL_SIZE,
            TEXT,
            PAGE_WIDTH - MARGIN_RIGHT - 12.0,
            top - 19.0,
        );
        if let Some(note) = note {
            self.text_at(note, Font::Italic, SMALL_SIZE, MUTED, MARGIN_LEFT + 12.0, top - 34.0);
        }

        self.y = top - height - 8.0;
    }

    /// Horizontal percentage bar with its label and numeric value.
    pub fn percent_bar(&mut self, label: &str, pct: u8, color: Color) {
        self.ensure_space(34.0);
        let y = self.y;

        self.text_at(label, Font::Bold, BODY_SIZE, TEXT, MARGIN_LEFT, y - BODY_SIZE);
        let value = format!("{}%", pct);
        self.text_right(&value, Font::Bold, BODY_SIZE, TEXT, PAGE_WIDTH - MARGIN_RIGHT, y - BODY_SIZE);

        let track_y = y - 24.0;
        self.current.fill_color(RULE).rect(MARGIN_LEFT, track_y, CONTENT_WIDTH, 8.0).fill();
        let fill = bar_fill_width(pct, CONTENT_WIDTH, self.bar_floor);
        self.current.fill_color(color).rect(MARGIN_LEFT, track_y, fill, 8.0).fill();

        self.y = y - 34.0;
    }

    /// Closing separator and centered caption at the bottom of the current
    /// page. Draws at a fixed position, independent of the cursor.
    pub fn footer_rule(&mut self, caption: &str) {
        self.current
            .stroke_color(RULE)
            .line_width(0.5)
            .line(MARGIN_LEFT, 46.0, PAGE_WIDTH - MARGIN_RIGHT, 46.0)
            .stroke();
        self.text_centered(caption, Font::Regular, SMALL_SIZE, MUTED, PAGE_WIDTH / 2.0, 34.0);
    }

    /// Seal the last page and assemble the document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let sealed = std::mem::take(&mut self.current);
        self.writer.push_page(PAGE_WIDTH, PAGE_HEIGHT, sealed);
        self.writer.finish()
    }
}
