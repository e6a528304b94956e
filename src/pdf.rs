//! Client-side PDF rendering of the pitch. Produces raw bytes; the download
//! plumbing lives in `export.rs`.

use anyhow::{anyhow, Result};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::i18n::{t, Language};
use crate::pitch::Pitch;

pub const PDF_FILE_NAME: &str = "zoho-pitch.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const WRAP_COLUMNS: usize = 90;

/// Greedy word wrap by column count. Words longer than the budget get a line
/// of their own rather than being split.
pub fn wrap_text(text: &str, max_columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_columns {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct Layout {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl Layout {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("builtin font: {e}"))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("builtin font: {e}"))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Layout {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn line_with(&mut self, text: &str, size: f32, bold: bool) {
        if self.y < MARGIN_MM {
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                "content",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn heading(&mut self, text: &str) {
        self.line_with(text, 13.0, true);
    }

    fn line(&mut self, text: &str) {
        self.line_with(text, 11.0, false);
    }

    fn paragraph(&mut self, text: &str) {
        for wrapped in wrap_text(text, WRAP_COLUMNS) {
            self.line(&wrapped);
        }
    }

    fn bullets<'a>(&mut self, items: impl Iterator<Item = &'a str>) {
        for item in items {
            self.paragraph(&format!("• {item}"));
        }
    }

    fn blank(&mut self) {
        self.y -= LINE_HEIGHT_MM / 2.0;
    }
}

/// Lays the fixed textual template out into a finished PDF document.
pub fn pitch_document(pitch: &Pitch, lang: Language) -> Result<Vec<u8>> {
    let mut layout = Layout::new("ZOHO Pitch")?;

    layout.line_with("ZOHO Pitch", 16.0, true);
    layout.blank();

    let industry = pitch
        .industry
        .clone()
        .unwrap_or_else(|| t("noData", lang));
    layout.line(&format!("Industry: {industry}"));
    layout.blank();

    if !pitch.pain_points.is_empty() {
        layout.heading("Key Challenges");
        layout.bullets(pitch.pain_points.iter().map(String::as_str));
        layout.blank();
    }

    if !pitch.solutions.is_empty() {
        layout.heading("Recommended Solutions");
        for solution in &pitch.solutions {
            layout.paragraph(&format!("• {}: {}", solution.title, solution.summary));
        }
        layout.blank();
    }

    if !pitch.proposal_benefits.is_empty() {
        layout.heading("Key Benefits");
        layout.bullets(pitch.proposal_benefits.iter().map(String::as_str));
        layout.blank();
    }

    layout.paragraph(&t("proposalClosing", lang));

    layout
        .doc
        .save_to_bytes()
        .map_err(|e| anyhow!("pdf serialization: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_column_budget() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        for line in &lines {
            assert!(line.chars().count() <= 9);
        }
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("short", 90), vec!["short"]);
        assert!(wrap_text("", 90).is_empty());
        assert!(wrap_text("   ", 90).is_empty());
    }

    #[test]
    fn overlong_words_get_their_own_line() {
        let lines = wrap_text("a reallyreallylongword b", 6);
        assert_eq!(lines, vec!["a", "reallyreallylongword", "b"]);
    }

    #[test]
    fn document_renders_for_any_payload() {
        let bytes = pitch_document(&Pitch::default(), Language::En).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let pitch: Pitch = serde_json::from_str(
            r#"{
                "industry":"Retail",
                "painPoints":["slow checkout","manual stock counts"],
                "solutions":[{"title":"CRM","summary":"Track every lead"}],
                "proposalBenefits":["Faster onboarding","Lower costs"]
            }"#,
        )
        .unwrap();
        let bytes = pitch_document(&pitch, Language::En).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
