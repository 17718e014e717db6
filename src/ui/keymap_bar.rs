//! Keymap help bar UI component.

use super::formatters::fit_width;
use crate::app::ViewMode;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, view: ViewMode, colors: &ThemeColors) {
    let keymap_text = match view {
        ViewMode::Animation => {
            "q:quit | Tab:view | space:play/pause | r:restart | l/→:step | +-:speed | y:copy | T:theme | ?:help"
        },
        ViewMode::Response | ViewMode::Voltage => "q:quit | Tab:view | T:theme | ?:help",
    };

    let paragraph = Paragraph::new(fit_width(keymap_text, area.width as usize))
        .style(Style::default().fg(colors.keymap_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
