use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::SignupApp;
use crate::form::{FieldName, FormModel, Framework};
use crate::ui::Layout;
use crate::vim::VimMode;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 22;

/// The sign-up card: heading, the active step's fields and the step controls
pub fn draw_card(frame: &mut Frame, area: Rect, app: &SignupApp) {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let card = Layout::centered_box(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" {} ", app.config.general.title))
        .title_style(app.theme.primary_style().add_modifier(Modifier::BOLD));
    let inner = block.inner(card);
    frame.render_widget(Clear, card);
    frame.render_widget(block, card);

    if inner.height < 8 || inner.width < 20 {
        return;
    }

    let chunks = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Description
            Constraint::Length(1), // Step indicator
            Constraint::Min(4),    // Fields
            Constraint::Length(3), // Controls
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(app.config.general.description.as_str())
            .style(app.theme.muted_style())
            .wrap(Wrap { trim: true }),
        chunks[0].inner(Margin::new(1, 0)),
    );

    draw_step_indicator(frame, chunks[1], app);

    let fields_area = Layout::shifted(chunks[2], app.slide_offset(), inner);
    draw_fields(frame, fields_area.inner(Margin::new(1, 0)), app);

    draw_controls(frame, chunks[3], app);
}

fn draw_step_indicator(frame: &mut Frame, area: Rect, app: &SignupApp) {
    let state = app.wizard_state();
    let mut spans = vec![Span::styled(
        format!(" Step {} of {}  ", state.current_step + 1, state.step_count),
        app.theme.muted_style(),
    )];
    for idx in 0..state.step_count {
        let style = if idx == state.current_step {
            app.theme.primary_style()
        } else {
            app.theme.muted_style()
        };
        let dot = if idx == state.current_step { "● " } else { "○ " };
        spans.push(Span::styled(dot, style));
    }
    if let Some(row) = Layout::row(area, 0) {
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &SignupApp) {
    let mut y = area.y;
    let bottom = area.y + area.height;

    for (idx, field) in app.wizard.current_fields().iter().enumerate() {
        if y >= bottom {
            break;
        }
        let focused = idx == app.focus;
        let remaining = Rect::new(area.x, y, area.width, bottom - y);
        let rows = if field.is_text() {
            draw_text_field(frame, remaining, app, *field, focused)
        } else {
            draw_framework_picker(frame, remaining, app, focused)
        };
        y += rows + 1;
    }
}

/// Label, input line and error line. Returns rows used.
fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    app: &SignupApp,
    field: FieldName,
    focused: bool,
) -> u16 {
    let label_style = if focused {
        app.theme.primary_style()
    } else {
        app.theme.style()
    };
    let Some(label_row) = Layout::row(area, 0) else {
        return 0;
    };
    frame.render_widget(Paragraph::new(field.label()).style(label_style), label_row);
    let Some(input_row) = Layout::row(area, 1) else {
        return 1;
    };

    let insert = focused && app.vim_mode == VimMode::Insert;
    frame.render_widget(Paragraph::new(input_line(app, field, focused, insert)), input_row);

    draw_error(frame, area, 2, app, field)
}

/// The form holds the value; the edit buffer only lends its cursor
fn input_line<'a>(app: &'a SignupApp, field: FieldName, focused: bool, insert: bool) -> Line<'a> {
    let prompt_style = if focused {
        app.theme.primary_style()
    } else {
        app.theme.muted_style()
    };
    let prompt = Span::styled("> ", prompt_style);
    let content = app.wizard.form().current().text(field).unwrap_or_default();

    if insert {
        let cursor = match app.buffer(field) {
            Some(buffer) if buffer.content() == content => buffer.cursor(),
            _ => content.chars().count(),
        };
        let before: String = content.chars().take(cursor).collect();
        let after: String = content.chars().skip(cursor).collect();
        return Line::from(vec![
            prompt,
            Span::styled(before, app.theme.style()),
            Span::styled("|", app.theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, app.theme.style()),
        ]);
    }

    if content.is_empty() {
        let placeholder = app.theme.muted_style().add_modifier(Modifier::ITALIC);
        return Line::from(vec![prompt, Span::styled(field.placeholder(), placeholder)]);
    }

    Line::from(vec![prompt, Span::styled(content, app.theme.style())])
}

fn draw_framework_picker(frame: &mut Frame, area: Rect, app: &SignupApp, focused: bool) -> u16 {
    let field = FieldName::Framework;
    let chosen = app.wizard.form().current().framework;

    let label = match chosen {
        Some(fw) => format!("{}: {fw}", field.label()),
        None => format!("{}: {}", field.label(), field.placeholder()),
    };
    let Some(label_row) = Layout::row(area, 0) else {
        return 0;
    };
    let label_style = if focused {
        app.theme.primary_style()
    } else {
        app.theme.style()
    };
    frame.render_widget(Paragraph::new(label).style(label_style), label_row);

    let mut rows = 1;
    for (idx, framework) in Framework::ALL.iter().enumerate() {
        let Some(row) = Layout::row(area, rows) else {
            return rows;
        };
        let marker = if chosen == Some(*framework) { "(•)" } else { "( )" };
        let highlighted = focused && idx == app.picker_selected;
        let style = if highlighted {
            app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            app.theme.style()
        };
        frame.render_widget(Paragraph::new(format!("  {marker} {framework}")).style(style), row);
        rows += 1;
    }

    draw_error(frame, area, rows, app, field)
}

/// Error message under a field, if any. Returns total rows used.
fn draw_error(frame: &mut Frame, area: Rect, row: u16, app: &SignupApp, field: FieldName) -> u16 {
    match (app.wizard.form().error(field), Layout::row(area, row)) {
        (Some(error), Some(line)) => {
            frame.render_widget(Paragraph::new(error).style(app.theme.error_style()), line);
            row + 1
        }
        _ => row,
    }
}

/// Previous / Next on one row, Submit full width below on the last step
fn draw_controls(frame: &mut Frame, area: Rect, app: &SignupApp) {
    let state = app.wizard_state();
    let area = area.inner(Margin::new(1, 0));
    let Some(row) = Layout::row(area, 0) else {
        return;
    };
    let halves = ratatui::layout::Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(row);

    if state.can_go_back() {
        frame.render_widget(
            Paragraph::new("[ Previous ]").style(button_style(app, true)),
            halves[0],
        );
    }

    if !state.is_last_step() {
        frame.render_widget(
            Paragraph::new("[ Next ]")
                .style(button_style(app, state.can_go_forward()))
                .alignment(Alignment::Right),
            halves[1],
        );
    } else if let Some(submit_row) = Layout::row(area, 2) {
        let label = if state.pending { "Validating..." } else { "Submit" };
        let style = button_style(app, state.can_submit()).add_modifier(Modifier::REVERSED);
        frame.render_widget(
            Paragraph::new(format!("[ {label} ]"))
                .style(style)
                .alignment(Alignment::Center),
            submit_row,
        );
    }
}

fn button_style(app: &SignupApp, enabled: bool) -> Style {
    if enabled {
        app.theme.primary_style().add_modifier(Modifier::BOLD)
    } else {
        app.theme.muted_style()
    }
}
