mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, FetchRequest, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::{ForecastProvider, WeatherApiClient};
use error::Result;
use logic::{CityOutcome, CompareOutcome, DashboardService};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{CityScreen, CompareScreen};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Some(Commands::Check) => {
            let config = Config::load(cli.config)?;
            let client = WeatherApiClient::new(config.weatherapi);
            match client.test_connection().await {
                Ok(true) => println!("WeatherAPI: OK"),
                Ok(false) => println!("WeatherAPI: FAILED (check your API key)"),
                Err(e) => println!("WeatherAPI: FAILED ({})", e),
            }
            return Ok(());
        }
        None => {}
    }

    // Load configuration, offering setup on first run
    let config = if Config::exists(cli.config.as_ref()) {
        Config::load(cli.config)?
    } else {
        let (config, _) = Config::setup_interactive()?;
        config
    };

    let client = WeatherApiClient::new(config.weatherapi);
    let dashboard = DashboardService::new(client);
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &dashboard).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend<Error = io::Error>, P: ForecastProvider>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dashboard: &DashboardService<P>,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::City => {
                    let screen =
                        CityScreen::new(&app.city.input, app.city.editing, app.city.outcome.as_ref())
                            .fetching(app.fetching)
                            .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Compare => {
                    let screen = CompareScreen::new(
                        &app.compare.left_input,
                        &app.compare.right_input,
                        app.compare.focus,
                        app.compare.editing,
                        app.compare.outcome.as_ref(),
                    )
                    .fetching(app.fetching)
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let editing = match app.screen {
                    Screen::City => app.city.editing,
                    Screen::Compare => app.compare.editing,
                };

                // Global key handling
                match key.code {
                    KeyCode::Char('q') if !editing => {
                        app.quit();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char(c) if !editing => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        // Handle queued fetch
        if let Some(request) = app.pending_fetch.take() {
            app.fetching = true;
            run_fetch(app, dashboard, request).await;
            app.fetching = false;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn run_fetch<P: ForecastProvider>(
    app: &mut App,
    dashboard: &DashboardService<P>,
    request: FetchRequest,
) {
    match request {
        FetchRequest::City(location) => match dashboard.city_view(&location).await {
            Ok(outcome) => {
                match &outcome {
                    CityOutcome::NotFound => app.set_status("City not found"),
                    CityOutcome::View(view) => {
                        let name = view.location.name.clone();
                        app.set_status(&format!("Forecast updated for {}", name));
                    }
                }
                app.city.outcome = Some(outcome);
            }
            Err(e) => {
                tracing::warn!("city fetch failed: {}", e);
                app.set_status(&format!("Fetch failed: {}", e));
            }
        },
        FetchRequest::Compare(left, right) => match dashboard.compare_view(&left, &right).await {
            Ok(outcome) => {
                match &outcome {
                    CompareOutcome::NotFound => app.set_status("One city not found"),
                    CompareOutcome::View(_) => app.set_status("Comparison updated"),
                }
                app.compare.outcome = Some(outcome);
            }
            Err(e) => {
                tracing::warn!("compare fetch failed: {}", e);
                app.set_status(&format!("Fetch failed: {}", e));
            }
        },
    }
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::City => handle_city_input(app, code),
        Screen::Compare => handle_compare_input(app, code),
    }
}

fn handle_city_input(app: &mut App, code: KeyCode) {
    if app.city.editing {
        match code {
            KeyCode::Esc => {
                app.city.editing = false;
            }
            KeyCode::Enter => {
                app.city.editing = false;
                app.submit_city();
            }
            KeyCode::Backspace => {
                app.city.input.pop();
            }
            KeyCode::Char(c) => {
                app.city.input.push(c);
            }
            _ => {}
        }
    } else {
        match code {
            KeyCode::Enter => {
                app.city.editing = true;
            }
            KeyCode::Char('r') => {
                app.submit_city();
            }
            _ => {}
        }
    }
}

fn handle_compare_input(app: &mut App, code: KeyCode) {
    if app.compare.editing {
        match code {
            KeyCode::Esc => {
                app.compare.editing = false;
            }
            KeyCode::Enter => {
                app.compare.editing = false;
            }
            KeyCode::Tab => {
                app.compare.toggle_focus();
            }
            KeyCode::Backspace => {
                app.compare.focused_input_mut().pop();
            }
            KeyCode::Char(c) => {
                app.compare.focused_input_mut().push(c);
            }
            _ => {}
        }
    } else {
        match code {
            KeyCode::Tab => {
                app.compare.toggle_focus();
            }
            KeyCode::Enter => {
                app.compare.editing = true;
            }
            KeyCode::Char('g') => {
                app.submit_compare();
            }
            _ => {}
        }
    }
}
