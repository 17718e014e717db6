//! Canvas rendering of the wheel animation.

use super::AnimationPlayer;
use crate::kinematics::FrameGeometry;
use crate::ui::formatters::format_stat_value;
use crate::ui::ThemeColors;
use crate::util::SceneLayoutConfig;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line, Points},
        Block, Borders,
    },
    Frame,
};

/// Draw the frame the player is on.
pub fn draw_animation(
    f: &mut Frame<'_>,
    area: Rect,
    player: &AnimationPlayer,
    scene: &SceneLayoutConfig,
    colors: &ThemeColors,
) {
    let frame = player.current();
    let x_bounds = scene.x_window(frame.wheel_center.x);

    let title = format!(
        " frame {}/{} | t={} s | x={} m | θ={}° | {}x{} ",
        frame.index + 1,
        player.len(),
        format_stat_value(player.time()),
        format_stat_value(frame.displacement),
        format_stat_value(player.angle().to_degrees()),
        player.speed(),
        if player.playing { "" } else { " (paused)" },
    );

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(colors.heading))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(scene.y_bounds)
        .paint(|ctx| {
            ctx.draw(&Line::new(x_bounds[0], 0.0, x_bounds[1], 0.0, colors.ground));
            paint_frame(ctx, frame, colors);
        });

    f.render_widget(canvas, area);
}

fn paint_frame(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    frame: &FrameGeometry,
    colors: &ThemeColors,
) {
    ctx.draw(&Circle {
        x: frame.wheel_center.x,
        y: frame.wheel_center.y,
        radius: frame.wheel_radius,
        color: colors.wheel,
    });

    let chassis = frame.chassis;
    ctx.draw(&Line::new(
        chassis.a.x,
        chassis.a.y,
        chassis.b.x,
        chassis.b.y,
        colors.chassis,
    ));

    // The marker pair is drawn as points only: hub and tracked rim point.
    let marker = frame.contact_marker;
    ctx.draw(&Points {
        coords: &[(marker.a.x, marker.a.y), (marker.b.x, marker.b.y)],
        color: colors.marker,
    });
}
