//! Runtime: event loop and input routing for the sidebar.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture,
//!   window title).
//! - Run the one-time mount before the first frame so the persisted theme is
//!   what the user sees first.
//! - Drive a single event loop that handles input and transition ticks.
//! - Route events to [`MainView`] and execute returned `Effect`s.
//!
//! Event Loop Strategy
//! - A dedicated input thread blocks on `crossterm::event::read()` and forwards
//!   events over a channel.
//! - Smart ticking: a fast interval (16 ms) only while a transition is
//!   running; a long interval (5 s) when idle.
use std::{
    io::Stdout,
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use sidebar_types::{Effect, Msg};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

const FAST_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(5000);

/// Rate limits pointer moves to one per fast tick without losing the last
/// one. A move that arrives too soon is held back and replaces any move
/// already held; it is released when input goes quiet or ahead of the next
/// non-move event.
#[derive(Debug, Default)]
struct MoveCoalescer {
    last_sent: Option<Instant>,
    pending: Option<Event>,
}

impl MoveCoalescer {
    /// Returns the events to forward, in order, after `event` arrives at `now`.
    fn accept(&mut self, event: Event, now: Instant) -> Vec<Event> {
        if !is_mouse_move(&event) {
            return self.pending.take().into_iter().chain(std::iter::once(event)).collect();
        }
        let throttled = self.last_sent.is_some_and(|sent| now.duration_since(sent) < FAST_INTERVAL);
        if throttled {
            self.pending = Some(event);
            return Vec::new();
        }
        self.pending = None;
        self.last_sent = Some(now);
        vec![event]
    }

    /// Releases the held move once no input arrived for a poll interval.
    fn flush(&mut self, now: Instant) -> Option<Event> {
        let event = self.pending.take()?;
        self.last_sent = Some(now);
        Some(event)
    }
}

fn is_mouse_move(event: &Event) -> bool {
    event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved)
}

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Mouse moves are coalesced to one per fast tick.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    thread::spawn(move || {
        let mut moves = MoveCoalescer::default();
        loop {
            let ready = match event::poll(FAST_INTERVAL) {
                Ok(false) => moves.flush(Instant::now()).into_iter().collect(),
                Ok(true) => match event::read() {
                    Ok(event) => moves.accept(event, Instant::now()),
                    Err(error) => {
                        warn!(%error, "failed to read terminal input");
                        break;
                    }
                },
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            };
            for event in ready {
                if sender.blocking_send(event).is_err() {
                    // Receiver dropped: the loop has exited.
                    return;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode, enter the alternate screen and name the
/// window after the logo.
fn setup_terminal(title: &str) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, main_view: &mut MainView) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Key(_) => Vec::new(),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => app.update(&Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, mounts the sidebar,
/// runs the async event loop, and performs cleanup on exit.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal(&app.ctx.branding.logo_label)?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    info!("sidebar closed");
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mount_effects = app.mount();
    cmd::run_from_effects(app, mount_effects);
    if let Ok(size) = terminal.size() {
        app.terminal_size = (size.width, size.height);
    }

    // Ticking strategy: fast while animating, very slow when idle.
    let mut current_interval = IDLE_INTERVAL;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    render(terminal, app, main_view)?;

    loop {
        let target_interval = if app.is_animating() { FAST_INTERVAL } else { IDLE_INTERVAL };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            if target_interval == FAST_INTERVAL {
                // Transitions start now, not at the last idle tick.
                last_tick = Instant::now();
            }
        }

        let needs_render = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, main_view, event);
                cmd::run_from_effects(app, effects);
                true
            }

            // Transition tick
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_tick);
                last_tick = now;
                let was_animating = app.is_animating();
                cmd::dispatch(app, &Msg::Tick(elapsed));
                was_animating
            }

            _ = signal::ctrl_c() => { break; }
        };

        if app.should_quit {
            break;
        }
        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SidebarOptions;
    use crossterm::event::{KeyEvent, MouseEvent};
    use ratatui::backend::TestBackend;
    use sidebar_types::{THEME_PREFERENCE_KEY, ThemeMode};
    use sidebar_util::{PreferenceStore, UserPreferences};
    use std::sync::Arc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn moved(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn rapid_moves_keep_the_latest_until_input_goes_quiet() {
        let start = Instant::now();
        let mut moves = MoveCoalescer::default();

        assert_eq!(moves.accept(moved(2, 4), start), vec![moved(2, 4)]);
        assert!(moves.accept(moved(2, 5), start + Duration::from_millis(5)).is_empty());
        assert!(moves.accept(moved(2, 6), start + Duration::from_millis(9)).is_empty());

        assert_eq!(moves.flush(start + Duration::from_millis(25)), Some(moved(2, 6)));
        assert_eq!(moves.flush(start + Duration::from_millis(41)), None);
    }

    #[test]
    fn held_move_is_delivered_ahead_of_the_next_event() {
        let start = Instant::now();
        let mut moves = MoveCoalescer::default();
        moves.accept(moved(2, 4), start);
        moves.accept(moved(2, 5), start + Duration::from_millis(5));

        let ready = moves.accept(key(KeyCode::Char('t')), start + Duration::from_millis(6));
        assert_eq!(ready, vec![moved(2, 5), key(KeyCode::Char('t'))]);
        assert_eq!(moves.flush(start + Duration::from_millis(30)), None);
    }

    #[test]
    fn spaced_out_moves_pass_straight_through() {
        let start = Instant::now();
        let mut moves = MoveCoalescer::default();
        moves.accept(moved(2, 4), start);
        moves.accept(moved(2, 5), start + Duration::from_millis(5));

        let later = start + FAST_INTERVAL + Duration::from_millis(1);
        assert_eq!(moves.accept(moved(2, 6), later), vec![moved(2, 6)]);
        assert_eq!(moves.flush(later + FAST_INTERVAL), None);
    }

    #[tokio::test]
    async fn loop_mounts_handles_input_and_quits() {
        let store = Arc::new(UserPreferences::ephemeral());
        let mut app = App::new(store.clone(), SidebarOptions::default());
        let mut main_view = MainView::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let (sender, mut receiver) = mpsc::channel(8);
        sender.send(key(KeyCode::Char('t'))).await.unwrap();
        sender.send(key(KeyCode::Char('q'))).await.unwrap();

        event_loop(&mut terminal, &mut app, &mut main_view, &mut receiver).await.unwrap();

        assert!(app.sidebar.is_mounted());
        assert!(app.should_quit);
        assert_eq!(app.sidebar.theme(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_PREFERENCE_KEY).as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn closed_input_channel_ends_the_loop() {
        let mut app = App::new(Arc::new(UserPreferences::ephemeral()), SidebarOptions::default());
        let mut main_view = MainView::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        let (sender, mut receiver) = mpsc::channel::<Event>(1);
        drop(sender);

        event_loop(&mut terminal, &mut app, &mut main_view, &mut receiver).await.unwrap();
        assert!(!app.should_quit);
    }
}
