mod card;
mod celebrate;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::SignupApp;
use crate::ui::Layout;
use crate::vim::VimMode;

/// Main draw function for the sign-up form
pub fn draw(frame: &mut Frame, app: &SignupApp) {
    let layout = Layout::new(frame.area());
    frame.render_widget(Clear, layout.full);
    frame.render_widget(Block::default().style(app.theme.style()), layout.full);

    draw_header(frame, layout.header, app);

    if app.is_submitted() {
        celebrate::draw_celebration(frame, layout.content, app);
    } else {
        card::draw_card(frame, layout.content, app);
    }

    draw_message(frame, layout.message, app);
    draw_status_bar(frame, layout.status, app);

    // Overlays
    if app.confirm_quit {
        draw_confirm_dialog(frame, app);
    }

    if app.show_help {
        draw_help(frame, app);
    }
}

/// 1-line header: title on the left, theme indicator on the right
fn draw_header(frame: &mut Frame, area: Rect, app: &SignupApp) {
    let Some(area) = Layout::row(area, 0) else {
        return;
    };
    let title = format!(" Newsletter (v{}) ", env!("CARGO_PKG_VERSION"));
    frame.render_widget(
        Paragraph::new(title).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );

    let theme = format!("[{} Ctrl+t] ", app.theme.mode.icon());
    frame.render_widget(
        Paragraph::new(theme)
            .style(app.theme.secondary_style())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_message(frame: &mut Frame, area: Rect, app: &SignupApp) {
    let msg = match &app.message {
        Some(m) if area.height > 0 => m,
        _ => return,
    };

    let (title, border_style, text_style) = if msg.is_error {
        (" Error ", app.theme.error_style(), app.theme.error_style())
    } else {
        (" Info ", app.theme.secondary_style(), app.theme.style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_style(border_style.add_modifier(Modifier::BOLD));

    let content = Line::from(vec![
        Span::styled(msg.text.as_str(), text_style),
        Span::styled(" (press any key to dismiss)", app.theme.muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &SignupApp) {
    // Squeezed out on short terminals
    let Some(area) = Layout::row(area, 0) else {
        return;
    };
    frame.render_widget(Clear, area);

    let mode_name = app.vim_mode.display_name();
    let mode_span = Span::styled(format!(" {mode_name} "), app.theme.mode_style(mode_name));

    let after_mode = if app.vim_mode == VimMode::Command {
        Span::styled(format!(":{}", app.command_buffer.content()), app.theme.style())
    } else {
        Span::styled(app.status_bar.left_hint.clone(), app.theme.muted_style())
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![mode_span, Span::raw(" "), after_mode])),
        Rect::new(area.x, area.y, area.width * 2 / 3, 1),
    );

    let state = app.wizard_state();
    let progress = if state.is_submitted {
        "done".to_string()
    } else {
        format!("{}/{}", state.current_step + 1, state.step_count)
    };
    let right_text = if app.status_bar.right_hint.is_empty() {
        progress
    } else {
        format!("{progress}  {}", app.status_bar.right_hint)
    };
    frame.render_widget(
        Paragraph::new(right_text)
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        Rect::new(area.x + area.width / 3, area.y, area.width * 2 / 3, 1),
    );
}

fn draw_confirm_dialog(frame: &mut Frame, app: &SignupApp) {
    let width = 44.min(frame.area().width.saturating_sub(4));
    let area = Layout::centered_box(frame.area(), width, 7);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.primary_style())
        .title(" Quit ");
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let message = if app.is_submitted() {
        "Close the form?"
    } else {
        "Leave without signing up?"
    };
    if let Some(row) = Layout::row(inner, 1) {
        frame.render_widget(
            Paragraph::new(message)
                .style(app.theme.style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            row,
        );
    }

    let hints = Line::from(vec![
        Span::styled("[", app.theme.style()),
        Span::styled("Y", app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("]es / [", app.theme.style()),
        Span::styled("N", app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("]o", app.theme.style()),
    ]);
    if let Some(row) = Layout::row(inner, 3) {
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), row);
    }
}

fn draw_help(frame: &mut Frame, app: &SignupApp) {
    let bold = app.theme.style().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled("Normal Mode", bold)),
        Line::from("  j/k, Tab     Move between fields / choices"),
        Line::from("  i, a, Enter  Edit the focused field"),
        Line::from("  Enter, Space Pick the highlighted framework"),
        Line::from("  n            Next step"),
        Line::from("  p            Previous step"),
        Line::from("  Ctrl+t       Toggle light/dark theme"),
        Line::from(""),
        Line::from(Span::styled("Insert Mode", bold)),
        Line::from("  Esc          Return to normal mode"),
        Line::from("  Enter        Next field / step / submit"),
        Line::from("  Ctrl+u/w     Clear line / delete word"),
        Line::from(""),
        Line::from(Span::styled("Commands", bold)),
        Line::from("  :next :prev :submit :theme :help :q"),
        Line::from(""),
        Line::from(Span::styled("Press Escape to close", app.theme.muted_style())),
    ];

    let height = (help_text.len() as u16 + 2).min(frame.area().height);
    let width = 50u16.min(frame.area().width.saturating_sub(4));
    let area = Layout::centered_box(frame.area(), width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(" Help ")
        .title_style(app.theme.primary_style());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(help_text).block(block), area);
}
