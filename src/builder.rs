//! Document construction helpers for maintenance reports.
//!
//! [`ReportBuilder`] turns records into PDF bytes by running the [`ReportLayout`] planner and
//! replaying the resulting text runs onto `printpdf` pages, and saves finished reports to disk.

use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use log::{debug, info};
use printpdf::{Mm, PdfDocument};

use crate::fonts;
use crate::layout::{LayoutError, LayoutPlan, ReportLayout};
use crate::model::{MaintenanceRecord, ReportRequest};

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;

fn mm_from_pt(value: f64) -> Mm {
    Mm(value * MM_PER_INCH / POINTS_PER_INCH)
}

/// Errors raised while rendering or saving a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The target folder could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The layout geometry cannot hold a table.
    #[error("Invalid report layout: {0}")]
    Layout(#[from] LayoutError),
    /// `printpdf` rejected the document.
    #[error("Failed to build PDF document: {0}")]
    Pdf(#[from] printpdf::Error),
    /// The encoded document could not be flushed into memory.
    #[error("Failed to encode PDF document: {0}")]
    Encode(#[source] io::Error),
    /// The report file could not be written.
    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Output of [`ReportBuilder::render`].
#[derive(Clone, Debug)]
pub struct RenderedReport {
    /// The encoded PDF document.
    pub bytes: Vec<u8>,
    /// Number of pages in the document.
    pub page_count: usize,
}

/// Renders maintenance records into landscape PDF reports.
#[derive(Clone, Debug, Default)]
pub struct ReportBuilder {
    layout: ReportLayout,
}

impl ReportBuilder {
    /// Creates a builder using the default A4 landscape layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the layout configuration and returns the updated builder.
    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Renders `records` into an in-memory PDF document.
    ///
    /// Fails with [`ReportError::Layout`] when the configured layout does not validate.
    pub fn render(&self, records: &[MaintenanceRecord]) -> Result<RenderedReport, ReportError> {
        self.layout.validate()?;
        let plan = self.layout.plan(records);
        let bytes = self.encode(&plan)?;
        Ok(RenderedReport {
            bytes,
            page_count: plan.pages().len(),
        })
    }

    fn encode(&self, plan: &LayoutPlan) -> Result<Vec<u8>, ReportError> {
        let width = mm_from_pt(plan.page_width());
        let height = mm_from_pt(plan.page_height());
        let (document, first_page, first_layer) =
            PdfDocument::new(self.layout.title.as_str(), width, height, "Page 1, Layer 1");
        let fonts = fonts::install_builtin_fonts(&document)?;

        let mut first = Some((first_page, first_layer));
        for (index, page) in plan.pages().iter().enumerate() {
            let (page_index, layer_index) = match first.take() {
                Some(indices) => indices,
                None => document.add_page(width, height, format!("Page {}, Layer 1", index + 1)),
            };
            let layer = document.get_page(page_index).get_layer(layer_index);

            for run in page.runs() {
                layer.use_text(
                    run.text.as_str(),
                    run.size.into(),
                    mm_from_pt(run.x),
                    mm_from_pt(run.y),
                    fonts.get(run.weight),
                );
            }
        }

        let mut writer = BufWriter::new(Vec::new());
        document.save(&mut writer)?;
        writer
            .into_inner()
            .map_err(|err| ReportError::Encode(err.into_error()))
    }

    /// Renders the request's records and writes the report to `folder/filename`.
    ///
    /// The folder is created when missing and an existing file at the target path is replaced.
    /// Returns the path the report was written to.
    pub fn save(&self, request: &ReportRequest) -> Result<PathBuf, ReportError> {
        self.layout.validate()?;
        let folder = PathBuf::from(request.folder());
        debug!("Ensuring output directory {} exists", folder.display());
        fs::create_dir_all(&folder).map_err(|source| ReportError::CreateDirectory {
            path: folder.clone(),
            source,
        })?;

        let report = self.render(request.records())?;
        let path = request.target_path();
        fs::write(&path, &report.bytes).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            "Saved {} records across {} page(s) to {} ({} bytes)",
            request.records().len(),
            report.page_count,
            path.display(),
            report.bytes.len()
        );
        Ok(path)
    }
}

/// Saves the report described by `request` using the default layout.
pub fn generate_report(request: &ReportRequest) -> Result<PathBuf, ReportError> {
    ReportBuilder::new().save(request)
}
