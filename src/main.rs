use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use issue_desk_lib::app::{App, AsyncAction, CatalogSource};
use issue_desk_lib::config::GatewayConfig;
use issue_desk_lib::handlers::{async_actions, input, mouse};
use issue_desk_lib::ui;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Check the persisted gateway configuration and exit
    #[arg(long)]
    check: bool,

    /// Run against the bundled demo catalogs, no network
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    // -- CLI MODE --
    if args.check {
        let config = GatewayConfig::load()?;
        if config.is_configured() {
            println!("gateway configured: endpoint set, sheet '{}'", config.sheet_name);
        } else {
            println!("gateway not configured: no endpoint url saved");
        }
        if config.can_read() {
            println!("catalog source configured: spreadsheet id and api key present");
        } else {
            println!("catalog source not configured: selectors will be empty");
        }
        return Ok(());
    }

    // -- TUI MODE (Default) --

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App State
    let source = if args.offline {
        CatalogSource::Builtin
    } else {
        CatalogSource::Remote
    };
    let mut app = App::new(source);

    // Async Channel
    let (tx, mut rx) = mpsc::channel::<AsyncAction>(32);
    app.start_catalog_load(&tx);

    let res = run_app(&mut terminal, &mut app, tx, &mut rx).await;

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tx: mpsc::Sender<AsyncAction>,
    rx: &mut mpsc::Receiver<AsyncAction>,
) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // 1. Check for Async Actions (Non-blocking)
        while let Ok(action) = rx.try_recv() {
            async_actions::handle_async_action(app, action);
        }

        app.on_tick();

        // 2. Poll inputs
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if input::handle_key_event(app, key, &tx) == input::InputResult::Quit {
                        app.should_quit = true;
                    }
                }
                Event::Mouse(mouse_event) => {
                    mouse::handle_mouse_event(app, mouse_event, &tx);
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
