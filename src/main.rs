use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use gitfeed::action::Action;
use gitfeed::app::{App, Effect, Overlay};
use gitfeed::client::{FeedClient, HttpFeedClient};
use gitfeed::config::{Cli, Config, ConfigFile, FeedLayout};
use gitfeed::event::{key_to_action, AppEvent, EventHandler};
use gitfeed::widgets;
use gitfeed::worker::{FeedHandle, FeedRequest, FeedWorker};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::resolve(cli, ConfigFile::load().unwrap_or_default());

    // Set up logging
    if let Some(ref log_file) = config.log_file {
        let file = std::fs::File::create(log_file)?;
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    run_tui(config).await
}

async fn run_tui(config: Config) -> Result<()> {
    let client: Arc<dyn FeedClient> = match HttpFeedClient::new(&config.endpoint) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Invalid feed endpoint {}: {}", config.endpoint, e);
            eprintln!();
            eprintln!("Set the base URL of a running feed server, e.g.");
            eprintln!("  GITFEED_ENDPOINT=http://localhost:5000");
            std::process::exit(1);
        }
    };

    // Initialize app state
    let mut app = App::new(config.endpoint.clone(), config.layout);
    app.polling_interval = Duration::from_secs(config.poll_interval);

    // Set up channels
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create worker
    let (worker, feed_handle) = FeedWorker::new(client, action_tx.clone());
    tokio::spawn(worker.run());

    // Initial load goes through the same refresh path as every later tick
    let effects = app.update(Action::Refresh);
    handle_effects(effects, &feed_handle);

    // Set up terminal
    let mut terminal = gitfeed::tui::init()?;

    // Set up event handler
    let mut events = EventHandler::new(Duration::from_secs(1));

    // Main loop
    loop {
        // Render
        terminal.draw(|frame| render(&mut app, frame))?;

        // Handle events
        tokio::select! {
            Some(event) = events.next() => {
                match event {
                    AppEvent::Key(key) => {
                        if let Some(action) = key_to_action(key, &app.overlay) {
                            let effects = app.update(action);
                            handle_effects(effects, &feed_handle);
                        }
                    }
                    AppEvent::Tick => {
                        let effects = app.update(Action::Tick);
                        handle_effects(effects, &feed_handle);
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                let effects = app.update(action);
                handle_effects(effects, &feed_handle);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    gitfeed::tui::restore()?;

    Ok(())
}

fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();

    frame.render_widget(
        ratatui::widgets::Block::default()
            .style(ratatui::style::Style::default().bg(gitfeed::theme::BG_DARK)),
        area,
    );

    let layout = Layout::vertical([
        Constraint::Length(1), // Status bar
        Constraint::Fill(1),   // Feed content
        Constraint::Length(1), // Footer
    ])
    .split(area);

    widgets::status_bar::render(app, frame, layout[0]);

    match app.layout {
        FeedLayout::List => widgets::event_list::render(app, frame, layout[1]),
        FeedLayout::Table => widgets::event_table::render(app, frame, layout[1]),
    }

    widgets::footer::render(app, frame, layout[2]);

    if let Overlay::Help = app.overlay {
        widgets::help_overlay::render(frame, area);
    }

    widgets::error_toast::render(app, frame, area);
}

fn handle_effects(effects: Vec<Effect>, feed_handle: &FeedHandle) {
    for effect in effects {
        match effect {
            Effect::LoadEvents => feed_handle.send(FeedRequest::LoadEvents),
            Effect::Quit => {}
        }
    }
}
