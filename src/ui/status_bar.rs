//! Status bar UI component.

use super::formatters::fit_width;
use crate::app::ViewMode;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    view: ViewMode,
    colors: &ThemeColors,
) {
    let text = fit_width(&format!("[{}] {}", view.name(), status), area.width as usize);

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
