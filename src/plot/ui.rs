//! Chart rendering for the response and voltage views.

use super::{ResponsePlot, Series, VoltagePlot};
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the response: angle on top, velocity below, sharing the time axis.
pub fn draw_response(f: &mut Frame<'_>, area: Rect, plot: &ResponsePlot, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_series_chart(
        f,
        chunks[0],
        SeriesChart {
            title: " θ (deg) ",
            y_title: "θ (deg)",
            color: colors.angle,
            series: &plot.angle,
            reference: plot.angle_reference.as_ref(),
            baseline: Some(&plot.baseline),
            x_bounds: plot.x_bounds,
            y_bounds: plot.angle_bounds,
        },
        colors,
    );
    draw_series_chart(
        f,
        chunks[1],
        SeriesChart {
            title: " ẋ (m/s) ",
            y_title: "ẋ (m/s)",
            color: colors.velocity,
            series: &plot.velocity,
            reference: plot.velocity_reference.as_ref(),
            baseline: Some(&plot.baseline),
            x_bounds: plot.x_bounds,
            y_bounds: plot.velocity_bounds,
        },
        colors,
    );
}

/// Draw the voltage chart, or a notice when the run has none.
pub fn draw_voltage(
    f: &mut Frame<'_>,
    area: Rect,
    plot: Option<&VoltagePlot>,
    colors: &ThemeColors,
) {
    let Some(plot) = plot else {
        let block = Block::default()
            .title(" V (V) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg));
        let para = Paragraph::new("No voltage series in this run")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    draw_series_chart(
        f,
        area,
        SeriesChart {
            title: " V (V) ",
            y_title: "V (V)",
            color: colors.velocity,
            series: &plot.voltage,
            reference: None,
            baseline: None,
            x_bounds: plot.x_bounds,
            y_bounds: plot.y_bounds,
        },
        colors,
    );
}

struct SeriesChart<'a> {
    title: &'a str,
    y_title: &'a str,
    color: Color,
    series: &'a Series,
    reference: Option<&'a Series>,
    baseline: Option<&'a Series>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

fn draw_series_chart(f: &mut Frame<'_>, area: Rect, chart: SeriesChart<'_>, colors: &ThemeColors) {
    let mut datasets = Vec::with_capacity(3);

    if let Some(baseline) = chart.baseline {
        datasets.push(
            Dataset::default()
                .graph_type(GraphType::Line)
                .marker(Marker::Braille)
                .style(Style::default().fg(colors.border))
                .data(baseline),
        );
    }

    // Reference drawn as sparse dots so it reads as a dotted line.
    if let Some(reference) = chart.reference {
        datasets.push(
            Dataset::default()
                .name("reference")
                .graph_type(GraphType::Scatter)
                .marker(Marker::Dot)
                .style(Style::default().fg(chart.color))
                .data(reference),
        );
    }

    datasets.push(
        Dataset::default()
            .graph_type(GraphType::Line)
            .marker(Marker::Braille)
            .style(Style::default().fg(chart.color))
            .data(chart.series),
    );

    let [x_min, x_max] = chart.x_bounds;
    let x_axis = Axis::default()
        .title("Tiempo (s)")
        .style(Style::default().fg(colors.text))
        .bounds(chart.x_bounds)
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let [y_min, y_max] = chart.y_bounds;
    let y_axis = Axis::default()
        .title(chart.y_title.to_string())
        .style(Style::default().fg(chart.color))
        .bounds(chart.y_bounds)
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .title(chart.title.to_string())
                .title_style(Style::default().fg(chart.color))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(widget, area);
}
