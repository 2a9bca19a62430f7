use crate::auth::StubAuthService;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::{State, ThemeStore, View};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout, Stdout};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration, opening
    /// the view addressed by `path`. Lines from the installed logger arrive on
    /// `log_rx`. Returns the result of the application execution.
    ///
    pub async fn start(config: Config, path: &str, log_rx: Receiver<String>) -> Result<()> {
        info!("Starting application...");
        let view = View::from_path(path).unwrap_or_else(|e| {
            warn!("{}, opening {} instead", e, View::Landing.path());
            View::Landing
        });

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let theme = ThemeStore::new(Box::new(config));
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, theme))),
        };
        app.start_network(rx)?;
        app.start_ui(view, log_rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<(), AppError> {
        debug!("Creating new thread for asynchronous networking...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            runtime.block_on(async {
                let auth = StubAuthService;
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &auth);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends by request or by error.
    ///
    async fn start_ui(&self, view: View, log_rx: Receiver<String>) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal, view, log_rx).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        view: View,
        log_rx: Receiver<String>,
    ) -> Result<()> {
        let theme_changes = {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.backend().size() {
                state.set_terminal_size(size);
            }
            state.navigate(view, Instant::now());
            state.theme_mut().subscribe()
        };

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            while let Ok(entry) = log_rx.try_recv() {
                state.push_log_entry(entry);
            }
            // Repaint every cell so no stale colors survive a palette swap
            if theme_changes.try_iter().count() > 0 {
                terminal.clear()?;
            }
            if let Ok(size) = terminal.backend().size() {
                state.set_terminal_size(size);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
