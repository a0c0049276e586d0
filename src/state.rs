use std::path::Path;

use crate::series::PlotData;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the window shows. Built once before the window opens and never
/// changed afterwards.
pub struct AppState {
    /// The two series and their axis labels.
    pub plot: PlotData,

    /// File name shown in the title and status bar.
    pub source_name: String,
}

impl AppState {
    pub fn new(source: &Path, plot: PlotData) -> Self {
        let source_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        Self { plot, source_name }
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        let n = self.plot.n_points();
        let rows = if n == 1 { "row" } else { "rows" };
        format!("{}: {n} {rows}", self.source_name)
    }
}
