use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fragen_katalog::ai::HintBackend;
use fragen_katalog::ai_worker::spawn_hint_request;
use fragen_katalog::analytics::STARTUP_EVENT;
use fragen_katalog::streak::celebration_elapsed;
use fragen_katalog::ui::ImageCache;
use fragen_katalog::{
    Analytics, App, AppEvent, Command, Config, HttpHintClient, draw, handle_mouse,
    handle_quiz_input, logger, questions,
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(config.log_file.as_deref());
    tracing::info!(?config, "starting fragen-katalog");

    let analytics = Analytics::init(&config);
    analytics.spawn_event(STARTUP_EVENT);

    let backend: Arc<dyn HintBackend> =
        Arc::new(HttpHintClient::new(&config.hint_url).map_err(io::Error::other)?);

    let (tx, rx) = mpsc::unbounded_channel::<AppEvent>();
    questions::spawn_load(config.questions.clone(), tx.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(config.images_dir.clone());
    let result = run(&mut terminal, app, backend, tx, rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("terminal error: {}", e);
    }
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    backend: Arc<dyn HintBackend>,
    tx: UnboundedSender<AppEvent>,
    mut rx: UnboundedReceiver<AppEvent>,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);
    let mut images = ImageCache::default();

    loop {
        terminal.draw(|f| draw(f, &app, &mut images))?;
        let celebration_deadline = app.nav.streak().celebration_deadline();

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = handle_quiz_input(&mut app, key, Instant::now()) {
                            execute_command(command, &backend, &tx);
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        let size = terminal.size()?;
                        let area = Rect::new(0, 0, size.width, size.height);
                        if let Some(command) = handle_mouse(&mut app, mouse, area, Instant::now()) {
                            execute_command(command, &backend, &tx);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                }
            }
            Some(event) = rx.recv() => app.apply(event),
            _ = ticker.tick() => app.tick(Instant::now()),
            _ = celebration_elapsed(celebration_deadline) => app.tick(Instant::now()),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn execute_command(
    command: Command,
    backend: &Arc<dyn HintBackend>,
    tx: &UnboundedSender<AppEvent>,
) {
    match command {
        Command::RequestHint(request) => {
            spawn_hint_request(Arc::clone(backend), request, tx.clone());
        }
    }
}
