use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::inventory::ProductStore;
use crate::logger::LogBuffer;
use crate::state::State;
use crate::ui::Theme;
use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;
use ratatui::{backend::CrosstermBackend, Terminal};

pub type ConfigSaveSender = std::sync::mpsc::Sender<()>;
type ConfigSaveReceiver = std::sync::mpsc::Receiver<()>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration and
    /// initial product collection. `log_buffer` must be the buffer the
    /// installed logger writes to. Returns the result of the application
    /// execution.
    ///
    pub async fn start(config: Config, store: ProductStore, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let (config_save_tx, config_save_rx) = std::sync::mpsc::channel::<()>();
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!("Unknown theme '{}', using default", config.theme_name);
            Theme::default()
        });
        info!("Loaded {} product(s)", store.len());
        let state = State::new(
            config_save_tx,
            store,
            theme,
            config.hotkeys.clone(),
            config.page_size,
            config.notification_duration(),
            log_buffer,
        );
        let mut app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_config_saver(config_save_rx);
        app.start_ui().await?;

        // Save config on exit
        {
            let state = app.state.lock().await;
            app.config.theme_name = state.get_theme().name.to_string();
            app.config.page_size = state.page_size();
            if let Err(e) = app.config.save() {
                error!("Failed to save config on exit: {}", e);
            }
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to handle config save requests.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) {
        let state = Arc::clone(&self.state);
        let mut config = self.config.clone();
        std::thread::spawn(move || {
            while receiver.recv().is_ok() {
                // The request is sent while the UI loop holds the lock
                let state_guard = state.blocking_lock();
                config.theme_name = state_guard.get_theme().name.to_string();
                config.page_size = state_guard.page_size();
                drop(state_guard);
                match config.save() {
                    Ok(()) => debug!("Saved configuration"),
                    Err(e) => error!("Failed to save config: {}", e),
                }
            }
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
