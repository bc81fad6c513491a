// PDF export surface, written with printpdf.
//
// A4 portrait, builtin Helvetica, a fixed number of item rows per page with
// the column header repeated, totals under the last row.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};
use tracing::info;

use crate::core::{money, AppError, Result};
use crate::modules::exports::models::{ItemRow, ReportLayout, COLUMNS};

const WIDTH: Mm = Mm(210.0);
const HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 14.0;
const TOP: f32 = 283.0;
const BOTTOM: f32 = 16.0;

const TITLE_SIZE: f32 = 13.0;
const FONT_SIZE: f32 = 9.0;
const ROW_STEP: f32 = 6.0;
const RULE_GAP: f32 = 2.0;

const ROWS_PER_PAGE: usize = 40;
const PRODUCT_CUTOFF_CHARS: usize = 30;

// Left edge of each column, in mm from the page's left side
const COL_X: [f32; 7] = [14.0, 38.0, 62.0, 124.0, 138.0, 161.0, 184.0];

/// Writes a report layout into a PDF document.
pub struct PdfWriter;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the document to a file path.
    pub fn write_file(&self, layout: &ReportLayout, path: &Path) -> Result<()> {
        let doc = self.build(layout)?;
        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| AppError::export(e.to_string()))?;
        info!(path = %path.display(), rows = layout.rows.len(), "wrote PDF report");
        Ok(())
    }

    /// Writes the document to in-memory bytes.
    pub fn write_bytes(&self, layout: &ReportLayout) -> Result<Vec<u8>> {
        let doc = self.build(layout)?;
        doc.save_to_bytes().map_err(|e| AppError::export(e.to_string()))
    }

    fn build(&self, layout: &ReportLayout) -> Result<PdfDocumentReference> {
        let (doc, page, layer) = PdfDocument::new(&layout.title, WIDTH, HEIGHT, "layer");
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| AppError::export(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| AppError::export(e.to_string()))?,
        };

        let mut layer = doc.get_page(page).get_layer(layer);
        layer.use_text(&layout.title, TITLE_SIZE, Mm(MARGIN), Mm(TOP), &fonts.bold);
        let mut y = TOP - 2.0 * ROW_STEP;
        y = self.render_column_header(&layer, &fonts, y);

        for (index, row) in layout.rows.iter().enumerate() {
            if index > 0 && index % ROWS_PER_PAGE == 0 {
                let (next_page, next_layer) = doc.add_page(WIDTH, HEIGHT, "layer");
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = self.render_column_header(&layer, &fonts, TOP);
            }
            self.render_item_row(&layer, &fonts, y, row);
            y -= ROW_STEP;
        }

        // Totals need three rows plus a rule below the last item
        if y - 4.0 * ROW_STEP < BOTTOM {
            let (next_page, next_layer) = doc.add_page(WIDTH, HEIGHT, "layer");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = TOP;
        }
        self.render_totals(&layer, &fonts, y, layout);

        Ok(doc)
    }

    fn render_column_header(&self, layer: &PdfLayerReference, fonts: &Fonts, y: f32) -> f32 {
        for (header, x) in COLUMNS.iter().zip(COL_X) {
            layer.use_text(*header, FONT_SIZE, Mm(x), Mm(y), &fonts.bold);
        }
        self.render_rule(layer, y - RULE_GAP);
        y - ROW_STEP
    }

    fn render_item_row(&self, layer: &PdfLayerReference, fonts: &Fonts, y: f32, row: &ItemRow) {
        let product: String = row.product.chars().take(PRODUCT_CUTOFF_CHARS).collect();
        let cells = [
            row.bill_no.clone(),
            row.date.clone(),
            product,
            row.quantity.to_string(),
            money::format_amount(row.sale_price),
            money::format_amount(row.unit_cost),
            money::format_amount(row.profit),
        ];
        for (cell, x) in cells.iter().zip(COL_X) {
            layer.use_text(cell, FONT_SIZE, Mm(x), Mm(y), &fonts.regular);
        }
    }

    fn render_totals(
        &self,
        layer: &PdfLayerReference,
        fonts: &Fonts,
        y: f32,
        layout: &ReportLayout,
    ) {
        self.render_rule(layer, y + ROW_STEP - RULE_GAP);

        let [sales, cost, profit] = layout.totals_text();
        let lines = [
            format!("Bills: {}", layout.bill_count),
            format!("Total Sales: {}", sales),
            format!("Total Cost: {}", cost),
            format!("Total Profit: {}", profit),
        ];
        let mut line_y = y;
        for text in lines {
            layer.use_text(text, FONT_SIZE, Mm(COL_X[3]), Mm(line_y), &fonts.bold);
            line_y -= ROW_STEP;
        }
    }

    fn render_rule(&self, layer: &PdfLayerReference, y: f32) {
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(y)), false),
                (Point::new(Mm(WIDTH.0 - MARGIN), Mm(y)), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
