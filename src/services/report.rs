//! Report service
//!
//! Computes everything the presentation layer shows for a session. Nothing is
//! cached; each call recomputes from the current stores.

use std::path::{Path, PathBuf};

use crate::config::{BusinessPaths, Settings};
use crate::error::BusinessResult;
use crate::export::ReportExporter;
use crate::reports::{
    aggregate, build_insights, build_summary, AggregateResult, ChartBar, Insights, Summary,
};
use crate::session::Session;

/// Service for the summary, insights and export of one session
pub struct ReportService<'a> {
    session: &'a Session,
    settings: &'a Settings,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(session: &'a Session, settings: &'a Settings) -> Self {
        Self { session, settings }
    }

    fn currency(&self) -> &str {
        &self.settings.currency_code
    }

    /// Totals and profit
    pub fn aggregate(&self) -> AggregateResult {
        aggregate(self.session.revenue(), self.session.expenses())
    }

    /// Human-readable totals and outcome
    pub fn summary(&self) -> Summary {
        build_summary(&self.aggregate(), self.currency())
    }

    /// Top items and sorted listings, or the need-more-data state
    pub fn insights(&self) -> Insights {
        build_insights(self.session.revenue(), self.session.expenses())
    }

    /// Revenue, Expenses and Profit bars for the chart
    pub fn chart_bars(&self) -> [ChartBar; 3] {
        self.aggregate().chart_bars(self.currency())
    }

    /// Encode the session with the given exporter
    pub fn export(&self, exporter: &ReportExporter) -> BusinessResult<Vec<u8>> {
        exporter.export(self.session.revenue(), self.session.expenses())
    }

    /// Encode the session and write it to `path`
    pub fn export_to(&self, exporter: &ReportExporter, path: &Path) -> BusinessResult<usize> {
        exporter.export_to_file(self.session.revenue(), self.session.expenses(), path)
    }

    /// Where a download lands when no path is given
    pub fn default_export_path(&self, paths: &BusinessPaths) -> PathBuf {
        paths.exports_dir().join(&self.settings.export_file_name)
    }
}
