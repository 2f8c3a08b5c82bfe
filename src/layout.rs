//! Page geometry and the single-pass table layout used by maintenance reports.
//!
//! [`ReportLayout`] holds every constant that influences placement: page size, margins, line
//! height, font sizes and column offsets.  [`ReportLayout::plan`] turns a slice of records into a
//! [`LayoutPlan`], a list of pages each carrying positioned text runs.  Planning is pure and
//! deterministic; converting the plan into PDF bytes is left to [`crate::builder`].
//!
//! All coordinates are PDF points with the origin at the bottom-left corner of the page, so the
//! vertical cursor moves *down* by decreasing.

use crate::fonts::{self, FontWeight};
use crate::model::MaintenanceRecord;

/// Width of an A4 page in landscape orientation, in points.
pub const A4_LANDSCAPE_WIDTH: f64 = 841.889_763_779_527_6;
/// Height of an A4 page in landscape orientation, in points.
pub const A4_LANDSCAPE_HEIGHT: f64 = 595.275_590_551_181_1;

/// Geometry that cannot hold a report table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error(
        "no table row fits: first row at {first_row_y}pt is below the bottom margin at {bottom_margin}pt"
    )]
    NoRowFits { first_row_y: f64, bottom_margin: f64 },
}

/// A table column: the header label and its offset from the left margin.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    label: String,
    offset: f64,
}

impl Column {
    /// Creates a column with the given header label and offset in points.
    pub fn new(label: impl Into<String>, offset: f64) -> Self {
        Self {
            label: label.into(),
            offset,
        }
    }

    /// Returns the header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the offset from the left margin, in points.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

fn default_columns() -> [Column; 8] {
    [
        Column::new("ID", 0.0),
        Column::new("Car", 30.0),
        Column::new("Lic.", 180.0),
        Column::new("Date", 240.0),
        Column::new("Miles", 320.0),
        Column::new("Service", 370.0),
        Column::new("Provider", 520.0),
        Column::new("Notes", 600.0),
    ]
}

/// Named layout constants for a report.
///
/// The defaults reproduce the standard landscape A4 report.  Every field can be replaced to
/// target a different page size or typographic scale without touching the layout algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportLayout {
    /// Page width in points.
    pub page_width: f64,
    /// Page height in points.
    pub page_height: f64,
    /// Distance of the table's first column from the left page edge.
    pub left_margin: f64,
    /// A row is moved to a new page once the cursor drops below this height.
    pub bottom_margin: f64,
    /// Distance of the title baseline from the top page edge.
    pub title_offset: f64,
    /// Distance of the record-count line from the top page edge.
    pub summary_offset: f64,
    /// Distance of the header row from the top page edge.
    pub table_offset: f64,
    /// Vertical distance between consecutive rows.
    pub line_height: f64,
    /// Report title drawn centered on the first page.
    pub title: String,
    pub title_size: u8,
    pub summary_size: u8,
    /// Header size on the first page.
    pub header_size: u8,
    /// Header size on continuation pages.
    pub repeated_header_size: u8,
    pub row_size: u8,
    /// Drawn in the notes column when a record has no notes.
    pub empty_notes_placeholder: String,
    /// The eight table columns, in record field order.
    pub columns: [Column; 8],
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width: A4_LANDSCAPE_WIDTH,
            page_height: A4_LANDSCAPE_HEIGHT,
            left_margin: 50.0,
            bottom_margin: 50.0,
            title_offset: 50.0,
            summary_offset: 80.0,
            table_offset: 100.0,
            line_height: 18.0,
            title: "Maintenance Report".to_owned(),
            title_size: 16,
            summary_size: 12,
            header_size: 12,
            repeated_header_size: 10,
            row_size: 10,
            empty_notes_placeholder: "-".to_owned(),
            columns: default_columns(),
        }
    }
}

/// A piece of text at a fixed position on a page.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Horizontal position of the text's left edge, in points.
    pub x: f64,
    /// Baseline height above the bottom page edge, in points.
    pub y: f64,
    /// Font size in points.
    pub size: u8,
    pub weight: FontWeight,
}

/// Text runs placed on one page, in drawing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagePlan {
    runs: Vec<TextRun>,
}

impl PagePlan {
    /// Returns the runs on this page.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Returns the text of every run on this page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|run| run.text.as_str())
    }

    fn push(&mut self, text: impl Into<String>, x: f64, y: f64, size: u8, weight: FontWeight) {
        self.runs.push(TextRun {
            text: text.into(),
            x,
            y,
            size,
            weight,
        });
    }
}

/// The complete placement of a report, one entry per page.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    page_width: f64,
    page_height: f64,
    pages: Vec<PagePlan>,
}

impl LayoutPlan {
    /// Returns the page width in points.
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Returns the page height in points.
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Returns the planned pages; never empty.
    pub fn pages(&self) -> &[PagePlan] {
        &self.pages
    }
}

impl ReportLayout {
    fn table_top(&self) -> f64 {
        self.page_height - self.table_offset
    }

    fn first_row_y(&self) -> f64 {
        self.table_top() - self.line_height
    }

    /// Returns how many records fit on one page below the header row.
    ///
    /// Zero means not even the first row clears the bottom margin; `usize::MAX` means the cursor
    /// never descends, so every row fits on the first page.
    pub fn rows_per_page(&self) -> usize {
        let usable = self.first_row_y() - self.bottom_margin;
        if usable < 0.0 {
            return 0;
        }
        if self.line_height <= 0.0 {
            return usize::MAX;
        }
        (usable / self.line_height).floor() as usize + 1
    }

    /// Returns the number of pages [`plan`](Self::plan) produces for `record_count` rows.
    pub fn page_count(&self, record_count: usize) -> usize {
        match self.rows_per_page() {
            _ if record_count == 0 => 1,
            // The first page keeps only its header and every row breaks onto a page of its own.
            0 => record_count + 1,
            rows => record_count.div_ceil(rows),
        }
    }

    /// Checks that the geometry can hold a table.
    ///
    /// Rejects non-finite or non-positive page dimensions and line height, and layouts where no
    /// row fits between the header row and the bottom margin.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("line_height", self.line_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::NonPositive { field, value });
            }
        }
        if self.rows_per_page() == 0 {
            return Err(LayoutError::NoRowFits {
                first_row_y: self.first_row_y(),
                bottom_margin: self.bottom_margin,
            });
        }
        Ok(())
    }

    fn column_x(&self, column: &Column) -> f64 {
        self.left_margin + column.offset()
    }

    fn draw_header_row(&self, page: &mut PagePlan, y: f64, size: u8) {
        for column in &self.columns {
            page.push(column.label(), self.column_x(column), y, size, FontWeight::Bold);
        }
    }

    fn draw_record(&self, page: &mut PagePlan, record: &MaintenanceRecord, y: f64) {
        let mut cells = record.cells();
        if cells[7].is_empty() {
            cells[7] = self.empty_notes_placeholder.as_str();
        }
        for (column, text) in self.columns.iter().zip(cells) {
            page.push(
                text,
                self.column_x(column),
                y,
                self.row_size,
                FontWeight::Regular,
            );
        }
    }

    /// Lays out the title, record count and table for `records`.
    ///
    /// The first page carries the centered title and a `Total records: N` line above the header
    /// row.  Rows follow in input order, one line apart; whenever the cursor has fallen below the
    /// bottom margin a new page is started and the header row repeated before the next record.
    pub fn plan(&self, records: &[MaintenanceRecord]) -> LayoutPlan {
        let mut pages = Vec::new();
        let mut page = PagePlan::default();

        let title_size = f64::from(self.title_size);
        let title_width = fonts::text_width(&self.title, FontWeight::Bold, title_size);
        page.push(
            self.title.as_str(),
            self.page_width / 2.0 - title_width / 2.0,
            self.page_height - self.title_offset,
            self.title_size,
            FontWeight::Bold,
        );
        page.push(
            format!("Total records: {}", records.len()),
            self.left_margin,
            self.page_height - self.summary_offset,
            self.summary_size,
            FontWeight::Regular,
        );

        let mut y = self.table_top();
        self.draw_header_row(&mut page, y, self.header_size);
        y -= self.line_height;

        for record in records {
            if y < self.bottom_margin {
                pages.push(std::mem::take(&mut page));
                y = self.table_top();
                self.draw_header_row(&mut page, y, self.repeated_header_size);
                y -= self.line_height;
            }
            self.draw_record(&mut page, record, y);
            y -= self.line_height;
        }
        pages.push(page);

        LayoutPlan {
            page_width: self.page_width,
            page_height: self.page_height,
            pages,
        }
    }
}
