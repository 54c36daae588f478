//! Paginated document rendering.
//!
//! Re-parses generated markdown line by line and lays out vector text on A4
//! pages, independent of any browser or DOM. Recognised line forms: H1
//! (`# `), H2 (`## `), H3 (`### `), bullets (`- `), bold-only lines
//! (`**...**`), blank lines, and paragraph text. Paragraph text accumulates
//! across consecutive plain lines and is flushed word-wrapped whenever a
//! structural line arrives. Inline `**bold**` runs inside paragraphs are
//! flattened to plain text; the paginated renderer does not support inline
//! rich text.
//!
//! Every page carries the themed background, the brand header with a
//! divider, and a centred page number. The decorative logo is optional: a
//! load failure falls back to the text-only header and never aborts the
//! export.

use crate::theme::{hex_to_rgb, PdfTheme};
use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rect, Rgb,
};
use printpdf::path::PaintMode;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const LEFT_MARGIN: f64 = 20.0;
const RIGHT_MARGIN: f64 = 20.0;
// Generous bottom margin so text never sticks to the page edge.
const BOTTOM_MARGIN: f64 = 35.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - (LEFT_MARGIN + RIGHT_MARGIN);

const BODY_SIZE: f64 = 11.0;
const BODY_LINE_HEIGHT: f64 = 4.5;
const PARAGRAPH_GAP: f64 = 4.0;
const PT_TO_MM: f64 = 0.352_778;

const HEADER_TEXT: &str = "Created with Briefgen";

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("failed to assemble PDF document: {0}")]
    Document(#[from] printpdf::Error),
    #[error("failed to write PDF file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type PdfResult<T> = std::result::Result<T, PdfError>;

/// Inputs for one render. The date is passed in rather than read from the
/// clock so layout is deterministic; export entry points stamp today.
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    pub title: &'a str,
    pub theme: &'a PdfTheme,
    pub generated_on: NaiveDate,
    /// Optional decorative header logo (PNG). Load failures are tolerated.
    pub logo_path: Option<&'a Path>,
}

/// A finished render: the document bytes, how many pages were laid out,
/// and the suggested download filename.
#[derive(Debug)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
    pub filename: String,
}

/// Strips an immediately-duplicated H1 title so the exported document does
/// not open with the same heading twice. Only the first few lines are
/// inspected; everything between the original title and its duplicate is
/// dropped along with the duplicate.
pub fn clean_duplicate_title(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let title = match lines.first() {
        Some(first) if first.starts_with("# ") => *first,
        _ => return content.to_owned(),
    };

    for i in 1..lines.len().min(5) {
        if lines[i].trim() == title.trim() {
            let mut kept = Vec::with_capacity(lines.len());
            kept.push(lines[0]);
            kept.extend_from_slice(&lines[i + 1..]);
            return kept.join("\n");
        }
    }

    content.to_owned()
}

/// A filesystem-safe slug of the document title, used as the filename stem.
pub fn slug_filename(title: &str) -> String {
    let mut slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    if slug.is_empty() {
        slug.push_str("brief");
    }
    slug.push_str(".pdf");
    slug
}

/// Approximate advance width of a character in em units for Helvetica.
/// Close enough for word wrapping; exact metrics are not needed because
/// the content width already carries generous margins.
fn char_em(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '!' | '\'' | '|' | 'I' => 0.278,
        ' ' | '(' | ')' | '[' | ']' | 'f' | 't' | 'r' | '/' | '\\' | '-' => 0.333,
        'm' | 'w' | 'M' | 'W' | '@' => 0.889,
        'A'..='Z' | '%' | '&' => 0.722,
        _ => 0.556,
    }
}

fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    let ems: f64 = text.chars().map(char_em).sum();
    ems * font_size_pt * PT_TO_MM
}

/// Greedy word wrap to a maximum line width. A word longer than the line
/// occupies its own line rather than being split mid-word.
fn wrap_text(text: &str, max_width_mm: f64, font_size_pt: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };

        if text_width_mm(&candidate, font_size_pt) <= max_width_mm || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_owned();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Removes well-formed inline `**bold**` markers, keeping the text.
fn strip_inline_bold(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        match rest.find("**") {
            Some(start) => match rest[start + 2..].find("**") {
                Some(end) => {
                    out.push_str(&rest[..start]);
                    out.push_str(&rest[start + 2..start + 2 + end]);
                    rest = &rest[start + 2 + end + 2..];
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            },
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

/// The recognised markdown line forms.
enum MdLine<'a> {
    H1(&'a str),
    H2(&'a str),
    H3(&'a str),
    Bullet(&'a str),
    BoldOnly(&'a str),
    Blank,
    Text(&'a str),
}

fn classify(line: &str) -> MdLine<'_> {
    if let Some(rest) = line.strip_prefix("# ") {
        return MdLine::H1(rest);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return MdLine::H2(rest);
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return MdLine::H3(rest);
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return MdLine::Bullet(rest);
    }
    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        return MdLine::BoldOnly(&line[2..line.len() - 2]);
    }
    if line.trim().is_empty() {
        return MdLine::Blank;
    }
    MdLine::Text(line)
}

fn rgb_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(rgb.0) / 255.0,
        f32::from(rgb.1) / 255.0,
        f32::from(rgb.2) / 255.0,
        None,
    ))
}

/// Logo bytes kept around so the image can be re-embedded on every page.
struct Logo {
    png: Vec<u8>,
    aspect: f64,
}

fn load_logo(path: Option<&Path>) -> Option<Logo> {
    let path = path?;
    let png = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("failed to read logo {}: {e}, using text-only header", path.display());
            return None;
        }
    };
    match decode_png(&png) {
        Some(image) => {
            let width = image.image.width.0 as f64;
            let height = image.image.height.0 as f64;
            if height <= 0.0 {
                return None;
            }
            Some(Logo {
                png,
                aspect: width / height,
            })
        }
        None => {
            tracing::warn!(
                "failed to decode logo {}, using text-only header",
                path.display()
            );
            None
        }
    }
}

fn decode_png(bytes: &[u8]) -> Option<Image> {
    let decoder = printpdf::image_crate::codecs::png::PngDecoder::new(Cursor::new(bytes)).ok()?;
    Image::try_from(decoder).ok()
}

/// Cursor-based page layout state. The vertical cursor runs top-down in
/// millimetres and is converted to PDF bottom-up coordinates when drawing.
struct Renderer<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    theme: &'a PdfTheme,
    logo: Option<Logo>,
    pages: usize,
    y: f64,
}

impl<'a> Renderer<'a> {
    fn new(title: &str, theme: &'a PdfTheme, logo: Option<Logo>) -> PdfResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut renderer = Renderer {
            doc,
            layer,
            font,
            font_bold,
            theme,
            logo,
            pages: 1,
            y: 0.0,
        };
        renderer.apply_background();
        renderer.y = renderer.draw_header_and_footer();
        Ok(renderer)
    }

    fn apply_background(&self) {
        if !self.theme.has_tinted_background() {
            return;
        }
        self.layer
            .set_fill_color(rgb_color(hex_to_rgb(self.theme.background)));
        let rect = Rect::new(Mm(0.0), Mm(0.0), Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32))
            .with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }

    /// Draws text at a top-based cursor position.
    fn draw_text(&self, text: &str, size: f64, x: f64, y_top: f64, bold: bool) {
        let font = if bold { &self.font_bold } else { &self.font };
        self.layer
            .use_text(text, size as f32, Mm(x as f32), Mm((PAGE_HEIGHT - y_top) as f32), font);
    }

    fn set_color(&self, hex: &str) {
        self.layer.set_fill_color(rgb_color(hex_to_rgb(hex)));
    }

    /// Draws the brand header, the divider, and this page's number.
    /// Returns the content start position.
    fn draw_header_and_footer(&mut self) -> f64 {
        let mut y = 20.0;

        self.set_color(self.theme.accent);
        let mut text_x = LEFT_MARGIN;

        if let Some(logo) = &self.logo {
            match decode_png(&logo.png) {
                Some(image) => {
                    let icon_height = 10.0;
                    let icon_width = icon_height * logo.aspect;
                    let px_height = image.image.height.0 as f64;
                    // Pick the DPI that makes the bitmap exactly icon_height tall.
                    let dpi = px_height * 25.4 / icon_height;
                    image.add_to_layer(
                        self.layer.clone(),
                        ImageTransform {
                            translate_x: Some(Mm(LEFT_MARGIN as f32)),
                            translate_y: Some(Mm((PAGE_HEIGHT - y - 2.0) as f32)),
                            dpi: Some(dpi as f32),
                            ..Default::default()
                        },
                    );
                    text_x = LEFT_MARGIN + icon_width + 5.0;
                }
                None => {
                    // Keep exporting with the text-only header.
                    tracing::warn!("logo decode failed mid-render, using text-only header");
                }
            }
        }

        self.draw_text(HEADER_TEXT, 10.0, text_x, y, false);

        y += 5.0;
        self.layer
            .set_outline_color(rgb_color(hex_to_rgb(self.theme.borders)));
        self.layer.set_outline_thickness(0.5);
        let divider = Line {
            points: vec![
                (Point::new(Mm(LEFT_MARGIN as f32), Mm((PAGE_HEIGHT - y) as f32)), false),
                (
                    Point::new(Mm((PAGE_WIDTH - RIGHT_MARGIN) as f32), Mm((PAGE_HEIGHT - y) as f32)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.add_line(divider);

        let page_label = format!("Page {}", self.pages);
        let centred_x = (PAGE_WIDTH - text_width_mm(&page_label, 9.0)) / 2.0;
        self.set_color(self.theme.accent);
        self.draw_text(&page_label, 9.0, centred_x, PAGE_HEIGHT - 10.0, false);

        self.set_color(self.theme.text);
        y + 15.0
    }

    /// Starts a fresh themed page and resets the cursor below its header.
    fn start_new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        self.apply_background();
        self.y = self.draw_header_and_footer();
    }

    fn page_break_due(&self) -> bool {
        self.y > PAGE_HEIGHT - BOTTOM_MARGIN - 10.0
    }

    /// Flushes accumulated paragraph text as a word-wrapped block.
    fn flush_paragraph(&mut self, buffer: &mut String) {
        let text = buffer.trim();
        if text.is_empty() {
            buffer.clear();
            return;
        }

        self.set_color(self.theme.text);
        let lines = wrap_text(text, CONTENT_WIDTH, BODY_SIZE);
        for (i, line) in lines.iter().enumerate() {
            self.draw_text(
                line,
                BODY_SIZE,
                LEFT_MARGIN,
                self.y + i as f64 * BODY_LINE_HEIGHT,
                false,
            );
        }
        self.y += PARAGRAPH_GAP + lines.len() as f64 * BODY_LINE_HEIGHT;
        buffer.clear();
    }

    fn heading(&mut self, text: &str, size: f64, advance: f64) {
        self.set_color(self.theme.headings);
        self.draw_text(text.trim(), size, LEFT_MARGIN, self.y, true);
        self.y += advance;
        self.set_color(self.theme.text);
    }

    fn bullet(&mut self, text: &str) {
        self.set_color(self.theme.text);
        let bullet_text = format!("\u{2022} {}", text.trim());
        let lines = wrap_text(&bullet_text, CONTENT_WIDTH - 5.0, BODY_SIZE);
        for (i, line) in lines.iter().enumerate() {
            self.draw_text(
                line,
                BODY_SIZE,
                LEFT_MARGIN + 5.0,
                self.y + i as f64 * BODY_LINE_HEIGHT,
                false,
            );
        }
        self.y += lines.len() as f64 * BODY_LINE_HEIGHT;
    }

    fn bold_line(&mut self, text: &str) {
        self.set_color(self.theme.text);
        self.draw_text(text.trim(), BODY_SIZE, LEFT_MARGIN, self.y, true);
        self.y += 6.0;
    }
}

/// Renders a markdown document into a paginated, themed PDF.
pub fn render_document(markdown: &str, options: &RenderOptions<'_>) -> PdfResult<RenderedDocument> {
    let logo = load_logo(options.logo_path);
    let mut renderer = Renderer::new(options.title, options.theme, logo)?;

    let cleaned = clean_duplicate_title(markdown);

    let mut paragraph = String::new();
    let mut in_heading = false;
    let mut previous_line_was_empty = false;

    for line in cleaned.split('\n') {
        if renderer.page_break_due() {
            renderer.start_new_page();
        }

        match classify(line) {
            MdLine::H1(text) => {
                renderer.flush_paragraph(&mut paragraph);
                renderer.heading(text, 18.0, 12.0);
                in_heading = true;
            }
            MdLine::H2(text) => {
                renderer.flush_paragraph(&mut paragraph);
                renderer.heading(text, 14.0, 8.0);
                in_heading = true;
            }
            MdLine::H3(text) => {
                renderer.flush_paragraph(&mut paragraph);
                renderer.heading(text, 12.0, 7.0);
                in_heading = true;
            }
            MdLine::Bullet(text) => {
                renderer.flush_paragraph(&mut paragraph);
                renderer.bullet(text);
                in_heading = false;
            }
            MdLine::BoldOnly(text) => {
                renderer.flush_paragraph(&mut paragraph);
                renderer.bold_line(text);
                in_heading = false;
            }
            MdLine::Blank => {
                if !previous_line_was_empty && !in_heading {
                    renderer.y += 3.0;
                }
                renderer.flush_paragraph(&mut paragraph);
                previous_line_was_empty = true;
                in_heading = false;
            }
            MdLine::Text(text) => {
                let processed = strip_inline_bold(text.trim());

                // Rough overflow estimate so a long paragraph starts on a
                // fresh page instead of spilling past the margin.
                let approximate_lines = (processed.len() as f64 / 80.0).ceil();
                if renderer.y + approximate_lines * 5.0 > PAGE_HEIGHT - BOTTOM_MARGIN - 10.0 {
                    renderer.start_new_page();
                }

                if in_heading {
                    paragraph = processed;
                    in_heading = false;
                } else if paragraph.is_empty() {
                    paragraph = processed;
                } else {
                    paragraph.push(' ');
                    paragraph.push_str(&processed);
                }
                previous_line_was_empty = false;
            }
        }
    }

    // Flush whatever paragraph text remains.
    if !paragraph.trim().is_empty() {
        let lines = wrap_text(paragraph.trim(), CONTENT_WIDTH, BODY_SIZE);
        if renderer.y + lines.len() as f64 * BODY_LINE_HEIGHT > PAGE_HEIGHT - BOTTOM_MARGIN - 10.0
        {
            renderer.start_new_page();
        }
        renderer.flush_paragraph(&mut paragraph);
        renderer.y += 5.0 - PARAGRAPH_GAP;
    }

    // Dated footer, on a fresh page when the current one is nearly full.
    if renderer.y > PAGE_HEIGHT - 20.0 {
        renderer.start_new_page();
    }
    renderer.set_color(renderer.theme.accent);
    let footer = format!("Generated on {}", options.generated_on.format("%Y-%m-%d"));
    renderer.draw_text(&footer, 10.0, LEFT_MARGIN, PAGE_HEIGHT - 10.0, false);

    let pages = renderer.pages;
    let bytes = renderer.doc.save_to_bytes()?;

    Ok(RenderedDocument {
        bytes,
        pages,
        filename: slug_filename(options.title),
    })
}

/// Renders and writes the document into `dir`, returning the file path.
pub fn export_to_file(
    markdown: &str,
    options: &RenderOptions<'_>,
    dir: &Path,
) -> PdfResult<PathBuf> {
    let rendered = render_document(markdown, options)?;
    let path = dir.join(&rendered.filename);
    std::fs::write(&path, &rendered.bytes).map_err(|source| PdfError::FileWrite {
        path: path.clone(),
        source,
    })?;
    tracing::info!("exported {} page(s) to {}", rendered.pages, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_by_name;

    fn options(theme: &'static str) -> RenderOptions<'static> {
        RenderOptions {
            title: "Web Development Brief",
            theme: theme_by_name(theme),
            generated_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            logo_path: None,
        }
    }

    #[test]
    fn short_document_fits_one_page() {
        let markdown = "# Web Development Brief\n\n## Project Overview\n\n**Project Name:** Acme\n\nA short description.\n";
        let rendered = render_document(markdown, &options("light")).unwrap();
        assert_eq!(rendered.pages, 1);
        assert!(rendered.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_document_overflows_to_multiple_pages() {
        let mut markdown = String::from("# Web Development Brief\n\n## Requirements\n\n");
        for i in 0..120 {
            markdown.push_str(&format!("- Requirement number {i} for the project\n"));
        }
        let rendered = render_document(&markdown, &options("light")).unwrap();
        assert!(rendered.pages >= 2, "expected overflow, got {} page(s)", rendered.pages);
    }

    #[test]
    fn tinted_theme_renders_successfully() {
        let markdown = "# Brief\n\nBody text.\n";
        let rendered = render_document(markdown, &options("dracula")).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn duplicate_title_is_removed() {
        let content = "# Title\n\n# Title\n\nBody";
        assert_eq!(clean_duplicate_title(content), "# Title\n\nBody");
    }

    #[test]
    fn distinct_headings_are_kept() {
        let content = "# Title\n\n## Section\n\nBody";
        assert_eq!(clean_duplicate_title(content), content);
    }

    #[test]
    fn duplicate_beyond_window_is_kept() {
        let content = "# Title\nA\nB\nC\nD\n# Title";
        assert_eq!(clean_duplicate_title(content), content);
    }

    #[test]
    fn missing_logo_falls_back_to_text_header() {
        let markdown = "# Brief\n\nBody text.\n";
        let opts = RenderOptions {
            logo_path: Some(Path::new("/nonexistent/logo.png")),
            ..options("light")
        };
        let rendered = render_document(markdown, &opts).unwrap();
        assert_eq!(rendered.pages, 1);
    }

    #[test]
    fn slug_is_filesystem_safe() {
        assert_eq!(
            slug_filename("Web Development Brief"),
            "web-development-brief.pdf"
        );
        assert_eq!(slug_filename("a/b:c"), "a-b-c.pdf");
        assert_eq!(slug_filename(""), "brief.pdf");
    }

    #[test]
    fn inline_bold_is_flattened() {
        assert_eq!(strip_inline_bold("a **b** c"), "a b c");
        assert_eq!(strip_inline_bold("no markers"), "no markers");
        assert_eq!(strip_inline_bold("odd ** marker"), "odd ** marker");
    }

    #[test]
    fn wrapping_respects_width() {
        let lines = wrap_text(
            "one two three four five six seven eight nine ten",
            20.0,
            BODY_SIZE,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, BODY_SIZE) <= 20.0 || !line.contains(' '));
        }
    }

    #[test]
    fn export_writes_slugged_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_to_file("# My Brief\n\nBody.\n", &options("light"), dir.path()).unwrap();
        assert!(path.ends_with("my-brief.pdf"));
        assert!(path.exists());
    }
}
