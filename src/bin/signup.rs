use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use signup_wizard::config::SignupConfig;
use signup_wizard::error::{Result, SignupError};
use signup_wizard::event::{Event, EventHandler};
use signup_wizard::signup::{self, SignupApp};
use signup_wizard::ui::ThemeMode;
use std::io::stdout;
use std::panic;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "signup-wizard")]
#[command(author, version, about = "Newsletter sign-up form for the terminal")]
struct Args {
    /// Path to config file (default: <config dir>/signup-wizard/signup.toml)
    #[arg(long)]
    config: Option<String>,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Skip the confetti after signing up
    #[arg(long)]
    no_confetti: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging only if log file is specified
    if let Some(ref log_path) = args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();

        info!("Starting signup-wizard");
    }

    let mut config = match args.config.as_deref() {
        Some(path) => SignupConfig::load_from(path)?,
        None => SignupConfig::load().unwrap_or_default(),
    };
    if args.light {
        config.theme.mode = ThemeMode::Light;
    }
    if args.no_confetti {
        config.celebration.confetti = false;
    }

    let mut app = SignupApp::new(config)?;

    // Set up panic handler to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app).await;
    restore_terminal()?;

    if let Err(ref e) = result {
        error!("Signup error: {}", e);
    }
    result?;

    // The submitted record goes to stdout once the terminal is restored
    if let Some(values) = app.submitted_values() {
        println!("{}", values.to_json()?);
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().map_err(|e| SignupError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| SignupError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| SignupError::Terminal(e.to_string()))
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| SignupError::Terminal(e.to_string()))?;
    execute!(stdout(), LeaveAlternateScreen).map_err(|e| SignupError::Terminal(e.to_string()))?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut SignupApp,
) -> Result<()> {
    let tick_rate = Duration::from_millis(60);
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal
            .draw(|frame| signup::ui::draw(frame, app))
            .map_err(|e| SignupError::Terminal(e.to_string()))?;

        match events.next().await {
            Some(Event::Key(key)) => {
                if let Some(action) = app.handle_key(key) {
                    app.perform(action).await;
                }
            }
            Some(Event::Resize) => {}
            Some(Event::Tick) => app.tick(),
            None => break,
        }

        if app.should_exit {
            break;
        }
    }

    Ok(())
}
