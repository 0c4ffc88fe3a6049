use eframe::egui;
use egui::Color32;
use egui_plot::{GridMark, HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints, VLine};
use rust_decimal::prelude::ToPrimitive;
use tickerlog_core::TickerLogError;

use super::{Chart, ChartPresenter, GRID_ALPHA, LINE_RGB};

const SECS_PER_DAY: f64 = 86_400.0;

/// Shows the chart in a maximized native window and blocks until it is closed.
///
/// Must be called from the main thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPresenter;

impl ChartPresenter for WindowPresenter {
    fn name(&self) -> &'static str {
        "window"
    }

    fn present(&self, chart: &Chart) -> Result<(), TickerLogError> {
        let app = ChartApp::from_chart(chart);
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_maximized(true)
                .with_title(chart.title.clone()),
            ..Default::default()
        };

        eframe::run_native(
            &chart.title,
            native_options,
            Box::new(|_cc| Box::new(app)),
        )
        .map_err(|e| TickerLogError::Chart(e.to_string()))
    }
}

struct ChartApp {
    title: String,
    x_label: String,
    y_label: String,
    legend: String,
    // x in days since the epoch so the axis formatter can recover dates
    points: Vec<[f64; 2]>,
    bounds: PlotBounds,
    gridlines: Vec<f64>,
    x_gridlines: Vec<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn day_x(ts: chrono::DateTime<chrono::Utc>) -> f64 {
    ts.timestamp() as f64 / SECS_PER_DAY
}

impl ChartApp {
    fn from_chart(chart: &Chart) -> Self {
        let points: Vec<[f64; 2]> = chart
            .points
            .iter()
            .filter_map(|p| p.close.to_f64().map(|y| [day_x(p.ts), y]))
            .collect();
        let x_min = points.first().map_or(0.0, |p| p[0]);
        let x_max = points.last().map_or(0.0, |p| p[0]);
        // a single day still needs a non-empty x span
        let (x_min, x_max) = if x_max > x_min {
            (x_min, x_max)
        } else {
            (x_min - 0.5, x_max + 0.5)
        };
        let bounds = PlotBounds::from_min_max(
            [x_min, chart.y_min.to_f64().unwrap_or(0.0)],
            [x_max, chart.y_max.to_f64().unwrap_or(0.0)],
        );
        Self {
            title: chart.title.clone(),
            x_label: chart.x_label.clone(),
            y_label: chart.y_label.clone(),
            legend: chart.legend.clone(),
            points,
            bounds,
            gridlines: chart.gridlines.iter().filter_map(ToPrimitive::to_f64).collect(),
            x_gridlines: chart.x_gridlines.iter().copied().map(day_x).collect(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_day(mark: GridMark, _max_chars: usize, _range: &std::ops::RangeInclusive<f64>) -> String {
    let secs = (mark.value * SECS_PER_DAY).round() as i64;
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);
            let [r, g, b] = LINE_RGB;
            let grid_color = Color32::from_gray(160).gamma_multiply(GRID_ALPHA);
            Plot::new("closing_price_plot")
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .x_axis_formatter(format_day)
                .show_grid(false)
                .set_margin_fraction(egui::Vec2::ZERO)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    // exact [min*0.9, max*1.1] y range, no auto margin
                    plot_ui.set_plot_bounds(self.bounds);
                    for level in &self.gridlines {
                        plot_ui.hline(
                            HLine::new(*level)
                                .color(grid_color)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                    for x in &self.x_gridlines {
                        plot_ui.vline(
                            VLine::new(*x)
                                .color(grid_color)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                    plot_ui.line(
                        Line::new(PlotPoints::new(self.points.clone()))
                            .color(Color32::from_rgb(r, g, b))
                            .name(&self.legend),
                    );
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use tickerlog_core::{PricePoint, PriceSeries};

    use super::*;
    use crate::chart::render;

    fn chart(closes: &[i64]) -> Chart {
        let points = closes
            .iter()
            .zip(1..)
            .map(|(c, d)| PricePoint {
                ts: Utc.with_ymd_and_hms(2024, 4, d, 0, 0, 0).unwrap(),
                close: Decimal::from(*c),
            })
            .collect();
        render(&PriceSeries::new("AAPL", points).unwrap())
    }

    #[test]
    fn plot_bounds_are_the_padded_y_range() {
        let app = ChartApp::from_chart(&chart(&[110, 100, 120]));
        assert_eq!(app.bounds.min()[1], 90.0);
        assert!((app.bounds.max()[1] - 132.0).abs() < 1e-9);
        assert_eq!(app.bounds.min()[0], app.points[0][0]);
        assert_eq!(app.bounds.max()[0], app.points[2][0]);
    }

    #[test]
    fn vertical_gridlines_sit_on_each_day() {
        let app = ChartApp::from_chart(&chart(&[110, 100, 120]));
        let xs: Vec<f64> = app.points.iter().map(|p| p[0]).collect();
        assert_eq!(app.x_gridlines, xs);
    }

    #[test]
    fn single_day_gets_a_one_day_span() {
        let app = ChartApp::from_chart(&chart(&[100]));
        assert!((app.bounds.max()[0] - app.bounds.min()[0] - 1.0).abs() < 1e-9);
    }
}
