//! BMI trend chart built from primitive draw operations.
//!
//! The chart maps a date-ordered BMI series into a padded plot area inside a
//! reserved box: a healthy-range band, two axes, a polyline with point
//! markers, and the first/last dates under the X axis. Points are spaced
//! evenly by index, not by elapsed time.

use super::context::{RenderContext, TextStyle};
use super::format::format_day;
use crate::geometry::{Point, Rect};
use crate::layout::palette;
use crate::model::Visit;
use crate::writer::FontVariant;
use chrono::NaiveDate;

/// Lower bound of the healthy BMI band.
pub const HEALTHY_MIN: f64 = 18.5;
/// Upper bound of the healthy BMI band.
pub const HEALTHY_MAX: f64 = 24.9;

const PLOT_PADDING: f32 = 28.0;
const AXIS_MARGIN: f64 = 2.0;
const EMPTY_MESSAGE: &str = "No BMI readings available.";

/// One plotted reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    /// Body-mass index
    pub bmi: f64,
    /// Day of the visit
    pub visit_date: NaiveDate,
}

/// Readings for the chart: visits with a finite BMI and a date, oldest first.
///
/// Both the standalone BMI section and the chart embedded in the visit
/// summary call this, so the two always plot the same series. Visits on the
/// same day keep their fetch order.
pub fn bmi_series(visits: &[Visit]) -> Vec<BmiReading> {
    let mut readings: Vec<(chrono::NaiveDateTime, f64)> = visits
        .iter()
        .filter_map(|visit| match (visit.bmi, visit.visit_date) {
            (Some(bmi), Some(date)) if bmi.is_finite() => Some((date, bmi)),
            _ => None,
        })
        .collect();
    readings.sort_by_key(|(date, _)| *date);
    readings
        .into_iter()
        .map(|(date, bmi)| BmiReading {
            bmi,
            visit_date: date.date(),
        })
        .collect()
}

/// Vertical extent of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiAxis {
    pub min: f64,
    pub max: f64,
}

impl BmiAxis {
    /// Axis covering both the readings and the healthy band, with 2 units of
    /// headroom on each side.
    pub fn for_readings(readings: &[BmiReading]) -> Self {
        let lowest = readings.iter().map(|r| r.bmi).fold(HEALTHY_MIN, f64::min);
        let highest = readings.iter().map(|r| r.bmi).fold(HEALTHY_MAX, f64::max);
        Self {
            min: lowest - AXIS_MARGIN,
            max: highest + AXIS_MARGIN,
        }
    }

    /// Value range, never zero.
    pub fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }
}

/// Chart title and box height.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub height: f32,
}

impl ChartOptions {
    /// Full-size chart for the BMI section.
    pub fn standalone() -> Self {
        Self {
            title: "BMI Trend".to_string(),
            height: 220.0,
        }
    }

    /// Smaller chart at the end of the visit summary.
    pub fn embedded() -> Self {
        Self {
            title: "BMI Trend (embedded)".to_string(),
            height: 180.0,
        }
    }
}

/// Draw the chart block at the cursor and move the cursor below it.
///
/// Returns the axis used, or `None` when there was nothing to plot and the
/// empty message was drawn instead.
pub fn draw_bmi_chart(
    ctx: &mut RenderContext,
    readings: &[BmiReading],
    options: &ChartOptions,
) -> Option<BmiAxis> {
    let height = options.height;
    ctx.ensure_space(ctx.margin() + height + 30.0);
    ctx.draw_text_line(&options.title, TextStyle::bold(13.0).with_color(palette::CHART_TITLE));

    let chart_width = ctx.content_width();
    let chart_bottom = ctx.cursor() - height;
    let chart = Rect::new(ctx.margin(), chart_bottom, chart_width, height);
    ctx.rect(chart, Some(palette::CHART_FILL), Some((palette::CHART_BORDER, 1.0)));

    if readings.is_empty() {
        let width = ctx.text_width(EMPTY_MESSAGE, FontVariant::Regular, 11.0);
        ctx.text_at(
            EMPTY_MESSAGE,
            chart.left() + (chart_width - width) / 2.0,
            chart_bottom + height / 2.0,
            TextStyle::regular(11.0).with_color(palette::CHART_EMPTY),
        );
        ctx.set_cursor(chart_bottom - 16.0);
        return None;
    }

    let axis = BmiAxis::for_readings(readings);
    let plot = chart.inset(PLOT_PADDING);
    let scale_x = if readings.len() > 1 {
        plot.width / (readings.len() - 1) as f32
    } else {
        0.0
    };
    let scale_y = plot.height as f64 / axis.span();
    let y_for = |value: f64| plot.y + ((value - axis.min) * scale_y) as f32;
    let point_at = |index: usize, value: f64| Point::new(plot.x + index as f32 * scale_x, y_for(value));

    let healthy_bottom = y_for(HEALTHY_MIN);
    let healthy_top = y_for(HEALTHY_MAX);
    ctx.rect(
        Rect::new(plot.x, healthy_bottom, plot.width, healthy_top - healthy_bottom),
        Some(palette::HEALTHY_BAND),
        None,
    );

    let origin = Point::new(plot.x, plot.y);
    ctx.line(origin, Point::new(plot.right(), plot.y), 1.0, palette::AXIS);
    ctx.line(origin, Point::new(plot.x, plot.top()), 1.0, palette::AXIS);

    let mut previous: Option<Point> = None;
    for (index, reading) in readings.iter().enumerate() {
        let point = point_at(index, reading.bmi);
        if let Some(prev) = previous {
            ctx.line(prev, point, 2.0, palette::SERIES_LINE);
        }
        ctx.circle(point, 3.0, palette::SERIES_POINT);
        previous = Some(point);
    }

    let date_style = TextStyle::regular(9.0).with_color(palette::MUTED);
    let first_date = format_day(readings[0].visit_date);
    let last_date = format_day(readings[readings.len() - 1].visit_date);
    ctx.text_at(&first_date, plot.x, plot.y - 14.0, date_style);
    let last_width = ctx.text_width(&last_date, FontVariant::Regular, 9.0);
    ctx.text_at(&last_date, plot.right() - last_width, plot.y - 14.0, date_style);

    ctx.text_at(
        "BMI",
        plot.x - 22.0,
        plot.top() - 8.0,
        TextStyle::bold(9.0).with_color(palette::AXIS_LABEL),
    );
    ctx.text_at(
        "Healthy range",
        plot.x + 8.0,
        healthy_top - 12.0,
        TextStyle::regular(8.0).with_color(palette::HEALTHY_LABEL),
    );

    ctx.set_cursor(chart_bottom - 18.0);
    log::debug!(
        "Plotted {} BMI readings on axis {:.1}..{:.1}",
        readings.len(),
        axis.min,
        axis.max
    );
    Some(axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use crate::render::document::DrawOp;

    fn visit(bmi: Option<f64>, day: Option<u32>) -> Visit {
        Visit {
            bmi,
            visit_date: day.map(|d| {
                NaiveDate::from_ymd_opt(2024, 1, d)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap()
            }),
            ..Default::default()
        }
    }

    fn reading(bmi: f64, day: u32) -> BmiReading {
        BmiReading {
            bmi,
            visit_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        }
    }

    #[test]
    fn test_series_filters_and_sorts() {
        let visits = vec![
            visit(Some(29.0), Some(20)),
            visit(None, Some(5)),
            visit(Some(31.0), None),
            visit(Some(f64::NAN), Some(6)),
            visit(Some(30.0), Some(10)),
        ];
        let series = bmi_series(&visits);
        assert_eq!(series, vec![reading(30.0, 10), reading(29.0, 20)]);
    }

    #[test]
    fn test_series_same_day_keeps_fetch_order() {
        let visits = vec![visit(Some(27.0), Some(3)), visit(Some(26.0), Some(3))];
        let values: Vec<f64> = bmi_series(&visits).iter().map(|r| r.bmi).collect();
        assert_eq!(values, vec![27.0, 26.0]);
    }

    #[test]
    fn test_axis_bounds() {
        let readings: Vec<_> = [31.2, 29.8, 28.0, 26.5, 25.1]
            .iter()
            .enumerate()
            .map(|(i, b)| reading(*b, i as u32 + 1))
            .collect();
        let axis = BmiAxis::for_readings(&readings);
        assert!((axis.min - 16.5).abs() < 1e-9);
        assert!((axis.max - 33.2).abs() < 1e-9);

        let inside = BmiAxis::for_readings(&[reading(21.0, 1)]);
        assert!((inside.min - 16.5).abs() < 1e-9);
        assert!((inside.max - 26.9).abs() < 1e-9);

        let low = BmiAxis::for_readings(&[reading(15.0, 1)]);
        assert!((low.min - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_draws_segments_and_markers() {
        let mut ctx = RenderContext::new(&ExportConfig::default());
        let readings: Vec<_> = (1..=5).map(|d| reading(30.0 - d as f64, d)).collect();
        let start = ctx.cursor();
        let axis = draw_bmi_chart(&mut ctx, &readings, &ChartOptions::standalone());
        assert!(axis.is_some());

        let ops = ctx.document().pages()[0].ops();
        let circles = ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count();
        let segments = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { thickness, .. } if *thickness == 2.0))
            .count();
        assert_eq!(circles, 5);
        assert_eq!(segments, 4);

        // title line (13 + 6), box, 18pt gap
        assert_eq!(ctx.cursor(), start - 19.0 - 220.0 - 18.0);
        let texts: Vec<_> = ctx.document().texts().collect();
        assert!(texts.contains(&"Jan 1, 2024"));
        assert!(texts.contains(&"Jan 5, 2024"));
        assert!(texts.contains(&"Healthy range"));
    }

    #[test]
    fn test_single_reading_sits_on_the_y_axis() {
        let mut ctx = RenderContext::new(&ExportConfig::default());
        draw_bmi_chart(&mut ctx, &[reading(27.0, 2)], &ChartOptions::embedded());
        let circle = ctx.document().pages()[0]
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap();
        assert_eq!(circle.x, 48.0 + 28.0);
    }

    #[test]
    fn test_empty_chart_shows_message() {
        let mut ctx = RenderContext::new(&ExportConfig::default());
        let start = ctx.cursor();
        let axis = draw_bmi_chart(&mut ctx, &[], &ChartOptions::embedded());
        assert!(axis.is_none());
        assert!(ctx.document().texts().any(|t| t == EMPTY_MESSAGE));
        assert!(!ctx.document().pages()[0]
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Circle { .. })));
        assert_eq!(ctx.cursor(), start - 19.0 - 180.0 - 16.0);
    }

    #[test]
    fn test_chart_moves_to_new_page_when_short_of_room() {
        let mut ctx = RenderContext::new(&ExportConfig::default());
        ctx.set_cursor(200.0);
        draw_bmi_chart(&mut ctx, &[reading(25.0, 1)], &ChartOptions::standalone());
        assert_eq!(ctx.document().page_count(), 2);
        assert!(ctx.document().pages()[0].ops().is_empty());
    }
}
