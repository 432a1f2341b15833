//! # PDF Rendering
//!
//! Draws a [`ReportLayout`] with printpdf. Layout positions are in points;
//! printpdf takes millimetres, so every coordinate is converted here.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::layout::{FontWeight, PlacedLine, ReportLayout, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::REPORT_TITLE;

const LAYER_NAME: &str = "Layer 1";

/// Points to millimetres (1pt = 1/72 inch).
fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn push_line(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    line: &PlacedLine,
) {
    let font = match line.weight {
        FontWeight::Regular => regular,
        FontWeight::Bold => bold,
    };
    layer.use_text(line.text.as_str(), line.size, mm(line.x), mm(line.y), font);
}

/// Renders every page of `layout` and writes the document to `path`.
///
/// An existing file at `path` is overwritten.
pub fn render_pdf(layout: &ReportLayout, path: &Path) -> ReportResult<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    for (index, page) in layout.pages().iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(mm(PAGE_WIDTH_PT), mm(PAGE_HEIGHT_PT), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in &page.lines {
            push_line(&layer, &regular, &bold, line);
        }
        debug!(page = index + 1, lines = page.lines.len(), "Rendered report page");
    }

    let mut writer = BufWriter::new(File::create(path)?);
    doc.save(&mut writer)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    Ok(())
}
