use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::series::PlotData;

const LINE_WIDTH: f32 = 1.5;

// ---------------------------------------------------------------------------
// Error plot (central panel)
// ---------------------------------------------------------------------------

/// Draw every series on one pair of axes.
///
/// Pan, zoom, box zoom and double-click reset are egui_plot's defaults.
pub fn error_plot(ui: &mut Ui, data: &PlotData) {
    Plot::new("error_plot")
        .x_axis_label(data.x_label)
        .y_axis_label(data.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &data.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                let line = Line::new(points)
                    .name(&series.name)
                    .color(series.color)
                    .width(LINE_WIDTH);

                plot_ui.line(line);
            }
        });
}
