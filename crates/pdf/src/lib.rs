//! # Briefgen PDF
//!
//! Theme-aware PDF export for generated briefs. The renderer re-parses the
//! final markdown line by line and lays out paginated vector text; no
//! browser or DOM is involved.

mod render;
mod theme;

pub use render::{
    clean_duplicate_title, export_to_file, render_document, PdfError, PdfResult, RenderOptions,
    RenderedDocument,
};
pub use theme::{hex_to_rgb, theme_by_name, PdfTheme, PDF_THEMES};
