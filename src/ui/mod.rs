//! User interface rendering.

pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::animation::ui::draw_animation;
use crate::app::{App, ViewMode};
use crate::plot::ui::{draw_response, draw_voltage};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    match app.view {
        ViewMode::Animation => {
            draw_animation(f, chunks[0], &app.player, &app.layout.scene, &colors)
        },
        ViewMode::Response => draw_response(f, chunks[0], &app.response, &colors),
        ViewMode::Voltage => draw_voltage(f, chunks[0], app.voltage.as_ref(), &colors),
    }

    draw_status(f, chunks[1], &app.status, app.view, &colors);
    draw_keymap(f, chunks[2], app.view, &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SimulationRun;
    use crate::kinematics::WheelGeometry;
    use crate::util::LayoutConfig;
    use ndarray::array;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_every_view_draws() {
        let run = SimulationRun::new(
            array![0.0, 0.1, 0.2],
            array![[0.0, 0.1, 0.2], [1.0, 1.0, 1.0]],
        )
        .unwrap()
        .with_voltage(array![0.0, 5.0, 2.0])
        .unwrap();
        let geometry = WheelGeometry::new(0.1, 0.3).unwrap();
        let mut app = App::new(run, geometry, LayoutConfig::default()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        for _ in 0..3 {
            terminal.draw(|f| draw(f, &app)).unwrap();
            let text: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect();
            assert!(text.contains(app.view.name()));
            app.next_view();
        }
    }
}
