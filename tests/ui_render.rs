// Headless rendering of the sign-up screens

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use signup_wizard::config::SignupConfig;
use signup_wizard::form::{FieldName, Framework};
use signup_wizard::signup::{self, SignupAction, SignupApp, SLIDE_FRAMES};

fn render(app: &SignupApp) -> String {
    render_sized(app, 80, 32)
}

fn render_sized(app: &SignupApp, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| signup::ui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn settle(app: &mut SignupApp) {
    for _ in 0..SLIDE_FRAMES {
        app.tick();
    }
}

async fn app_on_last_step() -> SignupApp {
    let mut app = SignupApp::new(SignupConfig::default()).unwrap();
    app.wizard.form_mut().set_text(FieldName::FirstName, "Ada");
    app.wizard.form_mut().set_framework(Framework::Svelte);
    app.perform(SignupAction::Next).await;
    app.perform(SignupAction::Next).await;
    settle(&mut app);
    app
}

#[tokio::test]
async fn first_step_shows_name_fields_and_hides_previous() {
    let app = SignupApp::new(SignupConfig::default()).unwrap();
    let screen = render(&app);

    assert!(screen.contains("Be the first to know!"));
    assert!(screen.contains("First name"));
    assert!(screen.contains("Your last name"));
    assert!(screen.contains("Step 1 of 3"));
    assert!(screen.contains("[ Next ]"));
    assert!(!screen.contains("[ Previous ]"));
    assert!(!screen.contains("Submit"));
}

#[tokio::test]
async fn errors_render_under_their_field() {
    let mut app = SignupApp::new(SignupConfig::default()).unwrap();
    app.perform(SignupAction::Next).await;

    let screen = render(&app);
    assert!(screen.contains("Please provide name at least 2 characters long"));
    assert!(screen.contains("Error"));
}

#[tokio::test]
async fn framework_step_lists_choices() {
    let mut app = SignupApp::new(SignupConfig::default()).unwrap();
    app.wizard.form_mut().set_text(FieldName::FirstName, "Ada");
    app.perform(SignupAction::Next).await;
    settle(&mut app);

    let screen = render(&app);
    for framework in Framework::ALL {
        assert!(screen.contains(framework.name()), "{framework} missing");
    }
    assert!(screen.contains("Select framework"));
    assert!(screen.contains("[ Previous ]"));
    assert!(screen.contains("[ Next ]"));
}

#[tokio::test]
async fn last_step_swaps_next_for_submit() {
    let app = app_on_last_step().await;
    let screen = render(&app);

    assert!(screen.contains("Your email"));
    assert!(screen.contains("[ Submit ]"));
    assert!(screen.contains("[ Previous ]"));
    assert!(!screen.contains("[ Next ]"));
}

#[tokio::test]
async fn submission_shows_thank_you() {
    let mut app = app_on_last_step().await;
    app.wizard.form_mut().set_text(FieldName::Email, "a@b.com");
    app.perform(SignupAction::Submit).await;

    let screen = render(&app);
    assert!(screen.contains("Thank you!"));
    assert!(screen.contains("a@b.com"));
    assert!(!screen.contains("Your email"));
}

#[tokio::test]
async fn help_overlay_lists_commands() {
    let mut app = SignupApp::new(SignupConfig::default()).unwrap();
    app.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));

    let screen = render(&app);
    assert!(screen.contains("Help"));
    assert!(screen.contains(":submit"));
}

#[tokio::test]
async fn header_shows_theme_icon() {
    let mut app = SignupApp::new(SignupConfig::default()).unwrap();
    assert!(render(&app).contains("☾"));

    app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
    assert!(render(&app).contains("☀"));
}

#[tokio::test]
async fn form_values_set_directly_show_on_the_card() {
    let mut app = SignupApp::new(SignupConfig::default()).unwrap();
    app.wizard.form_mut().set_text(FieldName::FirstName, "Ada");

    assert!(render(&app).contains("> Ada"));

    // Editing picks up from the form's value
    app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE));
    assert_eq!(app.first_name.content(), "Ada!");
    assert_eq!(app.wizard.form().current().first_name, "Ada!");
    assert!(render(&app).contains("> Ada!|"));
}

#[tokio::test]
async fn small_terminals_render_every_screen() {
    let mut states = Vec::new();

    states.push(SignupApp::new(SignupConfig::default()).unwrap());

    let mut quitting = app_on_last_step().await;
    quitting.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(quitting.confirm_quit);
    states.push(quitting);

    let mut help = SignupApp::new(SignupConfig::default()).unwrap();
    help.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
    states.push(help);

    let mut rejected = SignupApp::new(SignupConfig::default()).unwrap();
    rejected.perform(SignupAction::Next).await;
    states.push(rejected);

    let mut done = app_on_last_step().await;
    done.wizard.form_mut().set_text(FieldName::Email, "a@b.com");
    done.perform(SignupAction::Submit).await;
    assert!(done.confetti.is_some());
    states.push(done);

    for app in &states {
        for width in [1, 2, 5, 10, 20, 30, 53, 80] {
            for height in [1, 2, 3, 5, 8, 11, 14, 15, 20, 27, 40] {
                render_sized(app, width, height);
            }
        }
    }
}
