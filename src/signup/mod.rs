pub mod ui;
mod widgets;

pub use widgets::StatusBarState;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::SignupConfig;
use crate::error::Result;
use crate::form::{FieldName, FieldRules, FormValues, Framework, NewsletterForm};
use crate::ui::{Confetti, Theme};
use crate::vim::{parse_command, Command, InputBuffer, ModeAction, VimMode};
use crate::wizard::{
    newsletter_steps, Direction, Ignored, LogSubmission, StepWizard, Transition, WizardState,
};

/// Ticks a step change takes to slide into place
pub const SLIDE_FRAMES: u8 = 4;

pub type NewsletterWizard = StepWizard<NewsletterForm, LogSubmission>;

/// Wizard operations that await validation; run by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupAction {
    Next,
    Submit,
}

/// Message displayed to the user
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

/// In-progress step transition animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub direction: Direction,
    pub remaining: u8,
}

/// Sign-up form application state
pub struct SignupApp {
    pub config: SignupConfig,
    pub theme: Theme,
    pub wizard: NewsletterWizard,
    observed: watch::Receiver<WizardState>,

    // Vim mode state
    pub vim_mode: VimMode,
    pub command_buffer: InputBuffer,

    // Text buffers backing the free-text fields
    pub first_name: InputBuffer,
    pub last_name: InputBuffer,
    pub email: InputBuffer,

    /// Step the card is showing; lags the wizard until the change is observed
    shown_step: usize,
    /// Index into the current step's fields
    pub focus: usize,
    pub picker_selected: usize,

    // UI state
    pub message: Option<Message>,
    pub show_help: bool,
    pub confirm_quit: bool,
    pub should_exit: bool,
    pub status_bar: StatusBarState,
    pub slide: Option<Slide>,
    pub confetti: Option<Confetti>,
}

impl SignupApp {
    pub fn new(config: SignupConfig) -> Result<Self> {
        let form = NewsletterForm::new(FieldRules::from_config(&config.form));
        let wizard = StepWizard::new(newsletter_steps(), form, LogSubmission::new())?;
        let observed = wizard.subscribe();
        let theme = Theme::for_mode(config.theme.mode);

        let mut app = Self {
            config,
            theme,
            wizard,
            observed,
            vim_mode: VimMode::Normal,
            command_buffer: InputBuffer::new(),
            first_name: InputBuffer::new(),
            last_name: InputBuffer::new(),
            email: InputBuffer::new(),
            shown_step: 0,
            focus: 0,
            picker_selected: 0,
            message: None,
            show_help: false,
            confirm_quit: false,
            should_exit: false,
            status_bar: StatusBarState::default(),
            slide: None,
            confetti: None,
        };
        app.update_status_bar();
        Ok(app)
    }

    pub fn wizard_state(&self) -> WizardState {
        self.wizard.state()
    }

    pub fn is_submitted(&self) -> bool {
        self.wizard_state().is_submitted
    }

    /// The record handed to the submission handler, once submitted
    pub fn submitted_values(&self) -> Option<&FormValues> {
        self.wizard.handler().submitted()
    }

    pub fn focused_field(&self) -> FieldName {
        let fields = self.wizard.current_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn buffer(&self, field: FieldName) -> Option<&InputBuffer> {
        match field {
            FieldName::FirstName => Some(&self.first_name),
            FieldName::LastName => Some(&self.last_name),
            FieldName::Email => Some(&self.email),
            FieldName::Framework => None,
        }
    }

    fn buffer_mut(&mut self, field: FieldName) -> Option<&mut InputBuffer> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Framework => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SignupAction> {
        // Clear message on any key
        if self.message.is_some() {
            self.message = None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
            self.toggle_theme();
            self.update_status_bar();
            return None;
        }

        if self.confirm_quit {
            self.handle_confirm_key(key);
            self.update_status_bar();
            return None;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            self.update_status_bar();
            return None;
        }

        // Controls stay disabled while a validation is outstanding
        if self.wizard_state().pending {
            return None;
        }

        let result = if self.is_submitted() {
            self.handle_submitted_key(key);
            None
        } else {
            match self.vim_mode {
                VimMode::Normal => self.handle_normal_mode(key),
                VimMode::Insert => self.handle_insert_mode(key),
                VimMode::Command => self.handle_command_mode(key),
            }
        };

        self.sync_wizard_state();
        self.update_status_bar();
        result
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Option<SignupAction> {
        let field = self.focused_field();

        match key.code {
            KeyCode::Char(':') => {
                self.vim_mode = self.vim_mode.transition(ModeAction::EnterCommand);
                self.command_buffer.clear();
            }

            // Field focus
            KeyCode::Tab => self.focus_down(),
            KeyCode::BackTab => self.focus_up(),
            KeyCode::Char('j') | KeyCode::Down => {
                if field == FieldName::Framework {
                    self.picker_down();
                } else {
                    self.focus_down();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if field == FieldName::Framework {
                    self.picker_up();
                } else {
                    self.focus_up();
                }
            }

            KeyCode::Char('i') | KeyCode::Char('a') if field.is_text() => {
                self.enter_insert(key.code == KeyCode::Char('a'));
            }
            KeyCode::Enter => {
                if field.is_text() {
                    self.enter_insert(true);
                } else {
                    self.select_framework();
                }
            }
            KeyCode::Char(' ') if !field.is_text() => self.select_framework(),

            // Step navigation
            KeyCode::Char('n') | KeyCode::PageDown => return Some(SignupAction::Next),
            KeyCode::Char('p') | KeyCode::PageUp => self.prev(),

            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('q') | KeyCode::Esc => self.confirm_quit = true,

            _ => {}
        }
        None
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) -> Option<SignupAction> {
        let field = self.focused_field();

        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
            }
            KeyCode::Enter => {
                // Walk the step's fields, then move on from the last one
                let last_field = self.focus + 1 >= self.wizard.current_fields().len();
                if !last_field {
                    self.focus_down();
                    return None;
                }
                self.vim_mode = VimMode::Normal;
                return Some(if self.wizard_state().is_last_step() {
                    SignupAction::Submit
                } else {
                    SignupAction::Next
                });
            }
            KeyCode::Tab => self.focus_down(),
            KeyCode::BackTab => self.focus_up(),
            KeyCode::Backspace => self.edit(field, |buf| {
                buf.delete_back();
            }),
            KeyCode::Delete => self.edit(field, |buf| {
                buf.delete_forward();
            }),
            KeyCode::Left => self.edit(field, InputBuffer::move_left),
            KeyCode::Right => self.edit(field, InputBuffer::move_right),
            KeyCode::Home => self.edit(field, InputBuffer::move_start),
            KeyCode::End => self.edit(field, InputBuffer::move_end),
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
                'u' => self.edit(field, InputBuffer::clear),
                'w' => self.edit(field, InputBuffer::delete_word_back),
                'a' => self.edit(field, InputBuffer::move_start),
                'e' => self.edit(field, InputBuffer::move_end),
                _ => {}
            },
            KeyCode::Char(c) => self.edit(field, |buf| buf.insert(c)),
            _ => {}
        }
        None
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Option<SignupAction> {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = self.command_buffer.content().to_string();
                self.vim_mode = self.vim_mode.transition(ModeAction::Execute);
                self.command_buffer.clear();
                return self.execute_command(&cmd);
            }
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                } else {
                    self.command_buffer.delete_back();
                }
            }
            KeyCode::Char(c) => self.command_buffer.insert(c),
            _ => {}
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.confirm_quit = false;
                self.should_exit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_quit = false;
            }
            _ => {}
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
            self.should_exit = true;
        }
    }

    fn execute_command(&mut self, cmd: &str) -> Option<SignupAction> {
        match parse_command(cmd) {
            Ok(Command::Next) => return Some(SignupAction::Next),
            Ok(Command::Prev) => self.prev(),
            Ok(Command::Submit) => return Some(SignupAction::Submit),
            Ok(Command::Theme) => self.toggle_theme(),
            Ok(Command::Help) => self.show_help = true,
            Ok(Command::Quit) => self.confirm_quit = true,
            Err(e) => self.set_error(e.to_string()),
        }
        None
    }

    /// Run an action that awaits validation
    pub async fn perform(&mut self, action: SignupAction) -> Transition {
        let transition = match action {
            SignupAction::Next => self.wizard.next().await,
            SignupAction::Submit => self.wizard.submit().await,
        };
        debug!(?action, ?transition, "performed action");

        match transition {
            Transition::Rejected => self.report_rejection(),
            Transition::Ignored(Ignored::AtLastStep) => {
                self.set_info("This is the last step. Submit to finish.".to_string());
            }
            Transition::Ignored(Ignored::NotFinalStep) => {
                self.set_error("Submit is only available on the last step".to_string());
            }
            _ => {}
        }

        self.sync_wizard_state();
        self.update_status_bar();
        transition
    }

    fn prev(&mut self) {
        self.wizard.prev();
    }

    fn report_rejection(&mut self) {
        let current = self.wizard.current_fields();
        let elsewhere: Vec<FieldName> = self
            .wizard
            .form()
            .invalid_fields()
            .into_iter()
            .filter(|field| !current.contains(field))
            .collect();

        if elsewhere.is_empty() {
            self.set_error("Please fix the highlighted fields".to_string());
            return;
        }

        // A field on an earlier step was broken after that step was passed
        let labels: Vec<&str> = elsewhere.iter().map(|f| f.label()).collect();
        let step = self
            .wizard
            .steps()
            .iter()
            .position(|s| s.fields.contains(&elsewhere[0]))
            .map(|idx| idx + 1)
            .unwrap_or(1);
        self.set_error(format!(
            "Step {step} needs attention: {}",
            labels.join(", ")
        ));
    }

    /// React to wizard state changes published since the last call
    pub fn sync_wizard_state(&mut self) {
        if !self.observed.has_changed().unwrap_or(false) {
            return;
        }
        let state = *self.observed.borrow_and_update();

        if state.is_submitted {
            info!("showing celebration");
            self.vim_mode = VimMode::Normal;
            self.slide = None;
            if self.config.celebration.confetti {
                self.confetti = Some(Confetti::burst(self.config.celebration.pieces));
            }
            return;
        }

        if state.current_step != self.shown_step {
            self.shown_step = state.current_step;
            for field in FieldName::ALL {
                self.reload_buffer(field);
            }
            self.focus = 0;
            self.vim_mode = VimMode::Normal;
            self.slide = Some(Slide {
                direction: state.direction(),
                remaining: SLIDE_FRAMES,
            });
            if self.focused_field() == FieldName::Framework {
                self.picker_selected = self.current_framework_index();
            }
        }
    }

    /// Columns the card is currently displaced by; positive is to the right
    pub fn slide_offset(&self) -> i32 {
        match self.slide {
            Some(Slide { direction, remaining }) => {
                let distance = remaining as i32 * 6;
                match direction {
                    Direction::Forward => distance,
                    Direction::Backward => -distance,
                    Direction::Still => 0,
                }
            }
            None => 0,
        }
    }

    pub fn tick(&mut self) {
        if let Some(slide) = self.slide.as_mut() {
            slide.remaining = slide.remaining.saturating_sub(1);
            if slide.remaining == 0 {
                self.slide = None;
            }
        }

        if let Some(confetti) = self.confetti.as_mut() {
            confetti.tick();
            if confetti.is_finished() {
                self.confetti = None;
            }
        }
    }

    fn enter_insert(&mut self, at_end: bool) {
        self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
        let field = self.focused_field();
        self.reload_buffer(field);
        if at_end {
            if let Some(buf) = self.buffer_mut(field) {
                buf.move_end();
            }
        }
    }

    fn edit(&mut self, field: FieldName, op: impl FnOnce(&mut InputBuffer)) {
        self.reload_buffer(field);
        let Some(buf) = self.buffer_mut(field) else {
            return;
        };
        op(buf);
        let text = buf.content().to_string();
        self.wizard.form_mut().set_text(field, &text);
    }

    /// Pull a field's value from the form if it was changed there directly
    fn reload_buffer(&mut self, field: FieldName) {
        let Some(value) = self.wizard.form().current().text(field).map(str::to_string) else {
            return;
        };
        if let Some(buf) = self.buffer_mut(field) {
            if buf.content() != value {
                buf.set_content(&value);
            }
        }
    }

    fn focus_down(&mut self) {
        let count = self.wizard.current_fields().len();
        self.focus = (self.focus + 1) % count;
    }

    fn focus_up(&mut self) {
        let count = self.wizard.current_fields().len();
        self.focus = (self.focus + count - 1) % count;
    }

    fn picker_down(&mut self) {
        if self.picker_selected + 1 < Framework::ALL.len() {
            self.picker_selected += 1;
        }
    }

    fn picker_up(&mut self) {
        self.picker_selected = self.picker_selected.saturating_sub(1);
    }

    fn select_framework(&mut self) {
        let framework = Framework::ALL[self.picker_selected];
        self.wizard.form_mut().set_framework(framework);
        self.set_info(format!("Framework selected: {framework}"));
    }

    fn current_framework_index(&self) -> usize {
        self.wizard
            .form()
            .current()
            .framework
            .and_then(|fw| Framework::ALL.iter().position(|f| *f == fw))
            .unwrap_or(0)
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        info!(mode = ?self.theme.mode, "theme toggled");
    }

    pub fn set_error(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: true,
        });
    }

    pub fn set_info(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: false,
        });
    }

    pub fn update_status_bar(&mut self) {
        let state = self.wizard_state();
        self.status_bar = if state.is_submitted {
            StatusBarState::submitted()
        } else if state.pending {
            StatusBarState::validating()
        } else {
            match self.vim_mode {
                VimMode::Command => StatusBarState::command_mode(),
                _ if self.focused_field() == FieldName::Framework => {
                    StatusBarState::picker(state.is_last_step())
                }
                VimMode::Insert => {
                    let last_field = self.focus + 1 >= self.wizard.current_fields().len();
                    StatusBarState::text_field_insert(last_field, state.is_last_step())
                }
                VimMode::Normal => {
                    StatusBarState::text_field_normal(state.is_first_step(), state.is_last_step())
                }
            }
        };
    }
}
