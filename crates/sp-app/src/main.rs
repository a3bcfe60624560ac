use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, KeyEventKind};
use crossterm::{execute, terminal};
use dotenvy::dotenv;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use sp_app::app::App;
use sp_app::error::AppError;
use sp_app::views;
use sp_core::logging::{init_tracing_subscriber, install_tracing_panic_hook};

#[derive(Debug, Parser)]
#[command(name = "sp-app", about = "Terminal UI for the employee salary predictor")]
struct Cli {
    /// Artificial delay before a prediction is revealed, in milliseconds
    #[arg(long, env = "SP_PREDICT_DELAY_MS", default_value_t = 2000)]
    predict_delay_ms: u64,

    /// Event poll cadence of the render loop, in milliseconds
    #[arg(long, env = "SP_TICK_MS", default_value_t = 200)]
    tick_ms: u64,
}

fn run() -> Result<(), AppError> {
    dotenv().ok();
    init_tracing_subscriber("sp-app");
    install_tracing_panic_hook("sp-app");

    let cli = Cli::parse();
    let mut app = App::new(Duration::from_millis(cli.predict_delay_ms));
    let tick = Duration::from_millis(cli.tick_ms);
    info!(
        predict_delay_ms = cli.predict_delay_ms,
        tick_ms = cli.tick_ms,
        "sp-app starting"
    );

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, tick);

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| views::render(f, app))?;

        if event::poll(tick)? {
            if let event::Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.on_tick();

        if app.should_quit {
            info!("sp-app exiting");
            return Ok(());
        }
    }
}

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "sp-app failed");
        eprintln!("sp-app failed: {err}");
        std::process::exit(1);
    }
}
