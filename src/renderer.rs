//! Report rendering.
//!
//! Pure composition layer: walks the report's sections in a fixed order and
//! drives [`PageComposer`] for every piece of chrome, text, and artwork. A
//! section is emitted exactly when its input is present; absent sections
//! leave no placeholder behind.

use crate::error::Result;
use crate::fonts;
use crate::layout::{
    self, Font, PageComposer, CONTENT_TOP, MARGIN_LEFT, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::report::ReportData;
use crate::writer::Color;

/// Rendering knobs that are not part of the report content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Brand mark shown on the cover and in page headers.
    pub brand: String,
    /// Caption under the footer rule of the closing page.
    pub footer_caption: String,
    /// Minimum width of a percentage bar's filled part, in points.
    /// Zero disables the floor.
    pub bar_floor_pt: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            brand: "PawReport".to_string(),
            footer_caption: "Generated with care. Every pet is an individual; \
                             use this report as a starting point, not a verdict."
                .to_string(),
            bar_floor_pt: 5.0,
        }
    }
}

/// Display label and accent color for a dimension code.
///
/// Unknown codes render under their raw code with a neutral accent.
fn dimension_style(code: &str) -> (&str, Color) {
    match code {
        "SOC" => ("Sociability", Color::rgb(0.231, 0.510, 0.965)),
        "ENG" => ("Energy", Color::rgb(0.961, 0.620, 0.043)),
        "ATT" => ("Attachment", Color::rgb(0.937, 0.267, 0.267)),
        "SEN" => ("Sensitivity", Color::rgb(0.545, 0.361, 0.965)),
        "INT" => ("Intelligence", Color::rgb(0.063, 0.725, 0.506)),
        other => (other, Color::rgb(0.5, 0.5, 0.5)),
    }
}

const ACCENT_DIMENSIONS: Color = Color::rgb(0.231, 0.510, 0.965);
const ACCENT_ANALYSIS: Color = Color::rgb(0.545, 0.361, 0.965);
const ACCENT_STRENGTH: Color = Color::rgb(0.063, 0.725, 0.506);
const ACCENT_WATCH: Color = Color::rgb(0.937, 0.267, 0.267);
const ACCENT_ADVICE: Color = Color::rgb(0.961, 0.620, 0.043);
const ACCENT_COMPAT: Color = Color::rgb(0.051, 0.580, 0.533);
const ACCENT_CLOSING: Color = Color::rgb(0.420, 0.447, 0.502);

/// Render a report with default options.
pub fn render(report: &ReportData) -> Result<Vec<u8>> {
    render_with_options(report, &RenderOptions::default())
}

/// Render a report.
///
/// Validates the input, then builds the document: cover page, table of
/// contents, and one section per populated input block. Identical input
/// produces byte-identical output.
pub fn render_with_options(report: &ReportData, options: &RenderOptions) -> Result<Vec<u8>> {
    report.validate()?;

    let sections = planned_sections(report);
    log::debug!(
        "rendering report for {:?}: {} section(s)",
        report.pet_name,
        sections.len()
    );

    let mut composer = PageComposer::new(&options.brand, options.bar_floor_pt);
    draw_cover(&mut composer, report, options);

    composer.new_page();
    draw_toc(&mut composer, &sections);

    for (number, section) in sections.iter().enumerate() {
        let number = number as u32 + 1;
        match section {
            Section::Dimensions => draw_dimensions(&mut composer, report, number),
            Section::Analysis => draw_analysis(&mut composer, report, number),
            Section::Temperament => draw_temperament(&mut composer, report, number),
            Section::Advice => draw_advice(&mut composer, report, number),
            Section::Compatibility => draw_compatibility(&mut composer, report, number),
            Section::Closing => draw_closing(&mut composer, report, number, options),
        }
    }

    composer.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Dimensions,
    Analysis,
    Temperament,
    Advice,
    Compatibility,
    Closing,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Dimensions => "Personality Dimensions",
            Section::Analysis => "Personality Analysis",
            Section::Temperament => "Strengths & Watch Points",
            Section::Advice => "Care & Training Advice",
            Section::Compatibility => "Household Compatibility",
            Section::Closing => "Final Thoughts",
        }
    }

    fn accent(self) -> Color {
        match self {
            Section::Dimensions => ACCENT_DIMENSIONS,
            Section::Analysis => ACCENT_ANALYSIS,
            Section::Temperament => ACCENT_STRENGTH,
            Section::Advice => ACCENT_ADVICE,
            Section::Compatibility => ACCENT_COMPAT,
            Section::Closing => ACCENT_CLOSING,
        }
    }
}

/// Sections to emit, in order, based on which inputs are populated.
fn planned_sections(report: &ReportData) -> Vec<Section> {
    let mut sections = vec![Section::Dimensions];

    let has_analysis = report.analysis.as_ref().is_some_and(|a| {
        !a.summary.trim().is_empty()
            || !a.detailed_description.trim().is_empty()
            || !a.traits.is_empty()
            || !a.fun_facts.is_empty()
    });
    if has_analysis {
        sections.push(Section::Analysis);
    }
    if !report.strengths.is_empty() || !report.watch_points.is_empty() {
        sections.push(Section::Temperament);
    }
    if !report.tips.is_empty()
        || !report.activities.is_empty()
        || !report.rewards.is_empty()
        || !report.mistakes.is_empty()
    {
        sections.push(Section::Advice);
    }
    if report.compatibility.as_ref().is_some_and(|c| !c.is_empty()) {
        sections.push(Section::Compatibility);
    }
    if report
        .closing_summary
        .as_ref()
        .is_some_and(|s| !s.trim().is_empty())
    {
        sections.push(Section::Closing);
    }

    sections
}

fn draw_cover(composer: &mut PageComposer, report: &ReportData, options: &RenderOptions) {
    composer
        .content()
        .fill_color(layout::COVER_BG)
        .rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT)
        .fill();

    let center = PAGE_WIDTH / 2.0;
    let soft = Color::rgb(0.82, 0.85, 0.90);

    composer.text_centered(&options.brand, Font::Bold, 13.0, layout::WHITE, center, 770.0);

    // Title, wrapped and centered
    let title_lines = fonts::wrap(&report.profile_title, 440.0, 28.0, true);
    let mut y = 540.0 + (title_lines.len().saturating_sub(1)) as f32 * 18.0;
    for line in &title_lines {
        composer.text_centered(line, Font::Bold, 28.0, layout::WHITE, center, y);
        y -= 36.0;
    }

    if !report.profile_tagline.trim().is_empty() {
        for line in fonts::wrap(&report.profile_tagline, 420.0, 13.0, false) {
            composer.text_centered(&line, Font::Italic, 13.0, soft, center, y);
            y -= 18.0;
        }
    }

    let prepared = format!("A personality report for {}", report.pet_name);
    composer.text_centered(&prepared, Font::Regular, 12.0, soft, center, y - 24.0);

    composer.text_centered(&options.footer_caption, Font::Regular, 8.0, soft, center, 60.0);
}

fn draw_toc(composer: &mut PageComposer, sections: &[Section]) {
    composer.text_at("Contents", Font::Bold, 18.0, layout::TEXT, MARGIN_LEFT, CONTENT_TOP - 18.0);
    composer.set_cursor(CONTENT_TOP - 54.0);

    for (i, section) in sections.iter().enumerate() {
        let y = composer.y();
        composer.content().fill_color(section.accent()).circle(MARGIN_LEFT + 5.0, y - 4.0, 5.0).fill();
        let entry = format!("{}.  {}", i + 1, section.title());
        composer.text_at(&entry, Font::Regular, 12.0, layout::TEXT, MARGIN_LEFT + 18.0, y - 8.0);
        composer.advance(24.0);
    }
    composer.advance(16.0);
}

fn draw_dimensions(composer: &mut PageComposer, report: &ReportData, number: u32) {
    composer.section_header(number, Section::Dimensions.title(), ACCENT_DIMENSIONS);

    for (code, pct) in report.ordered_dimensions() {
        let (label, color) = dimension_style(code);
        composer.percent_bar(label, pct, color);
        if let Some(note) = report.dimension_notes.get(code) {
            if !note.trim().is_empty() {
                composer.italic_paragraph(note);
            }
        }
        composer.advance(4.0);
    }
    composer.advance(8.0);
}

fn draw_analysis(composer: &mut PageComposer, report: &ReportData, number: u32) {
    // Presence was established during planning
    let Some(analysis) = report.analysis.as_ref() else {
        return;
    };
    composer.section_header(number, Section::Analysis.title(), ACCENT_ANALYSIS);

    if !analysis.summary.trim().is_empty() {
        composer.paragraph(&analysis.summary);
    }
    if !analysis.traits.is_empty() {
        composer.subsection_label("Defining traits", ACCENT_ANALYSIS);
        for item in &analysis.traits {
            composer.bullet(item, ACCENT_ANALYSIS);
        }
        composer.advance(6.0);
    }
    if !analysis.detailed_description.trim().is_empty() {
        composer.paragraph(&analysis.detailed_description);
    }
    if !analysis.fun_facts.is_empty() {
        composer.subsection_label("Fun facts", ACCENT_ANALYSIS);
        for item in &analysis.fun_facts {
            composer.bullet(item, ACCENT_ANALYSIS);
        }
    }
    composer.advance(8.0);
}

fn draw_temperament(composer: &mut PageComposer, report: &ReportData, number: u32) {
    composer.section_header(number, Section::Temperament.title(), ACCENT_STRENGTH);

    if !report.strengths.is_empty() {
        composer.subsection_label("Natural strengths", ACCENT_STRENGTH);
        for item in &report.strengths {
            composer.bullet(item, ACCENT_STRENGTH);
        }
        composer.advance(6.0);
    }
    if !report.watch_points.is_empty() {
        composer.subsection_label("Worth watching", ACCENT_WATCH);
        for item in &report.watch_points {
            composer.bullet(item, ACCENT_WATCH);
        }
    }
    composer.advance(8.0);
}

fn draw_advice(composer: &mut PageComposer, report: &ReportData, number: u32) {
    composer.section_header(number, Section::Advice.title(), ACCENT_ADVICE);

    if !report.tips.is_empty() {
        composer.subsection_label("Everyday tips", ACCENT_ADVICE);
        for tip in &report.tips {
            composer.bullet(tip, ACCENT_ADVICE);
        }
        composer.advance(6.0);
    }

    let groups: [(&str, &[String], &[String], Color); 3] = [
        ("Recommended activities", &report.activities, &report.activity_why, ACCENT_STRENGTH),
        ("Rewards that work", &report.rewards, &report.reward_why, ACCENT_ADVICE),
        ("Mistakes to avoid", &report.mistakes, &report.mistake_why, ACCENT_WATCH),
    ];
    for (label, items, whys, accent) in groups {
        if items.is_empty() {
            continue;
        }
        composer.subsection_label(label, accent);
        for (i, item) in items.iter().enumerate() {
            composer.advice_card(item, whys.get(i).map(String::as_str), accent);
        }
        composer.advance(6.0);
    }
    composer.advance(8.0);
}

fn draw_compatibility(composer: &mut PageComposer, report: &ReportData, number: u32) {
    let Some(entries) = report.compatibility.as_ref() else {
        return;
    };
    composer.section_header(number, Section::Compatibility.title(), ACCENT_COMPAT);
    for entry in entries {
        composer.compat_card(&entry.label, &entry.value, entry.note.as_deref());
    }
    composer.advance(8.0);
}

fn draw_closing(
    composer: &mut PageComposer,
    report: &ReportData,
    number: u32,
    options: &RenderOptions,
) {
    let Some(summary) = report.closing_summary.as_ref() else {
        return;
    };
    composer.section_header(number, Section::Closing.title(), ACCENT_CLOSING);
    composer.italic_paragraph(summary);
    composer.footer_rule(&options.footer_caption);
}
