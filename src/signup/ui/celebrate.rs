use ratatui::{prelude::*, widgets::Paragraph};

use super::super::SignupApp;
use crate::ui::Layout;

pub fn draw_celebration(frame: &mut Frame, area: Rect, app: &SignupApp) {
    if area.height < 3 {
        return;
    }
    let mid = area.height / 2;

    if let Some(row) = Layout::row(area, mid - 1) {
        frame.render_widget(
            Paragraph::new(app.config.general.thank_you.as_str())
                .style(app.theme.success_style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            row,
        );
    }

    if let (Some(values), Some(row)) = (app.submitted_values(), Layout::row(area, mid + 1)) {
        frame.render_widget(
            Paragraph::new(format!("We'll be in touch at {}", values.email))
                .style(app.theme.muted_style())
                .alignment(Alignment::Center),
            row,
        );
    }

    // Confetti falls over the text
    if let Some(confetti) = &app.confetti {
        frame.render_widget(confetti, area);
    }
}
