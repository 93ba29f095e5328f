use crate::config::{Config, SubmissionConfig};
use crate::error::{AppResult, SubmissionError};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::inquiry::{HttpSubmitter, InquirySubmitter, LogSubmitter};
use crate::logger;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
pub type ConfigSaveSender = std::sync::mpsc::Sender<String>;
type ConfigSaveReceiver = std::sync::mpsc::Receiver<String>;
type LogReceiver = std::sync::mpsc::Receiver<String>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let (log_tx, log_rx) = std::sync::mpsc::channel::<String>();
        logger::install(config.log_level_filter()?, log_tx)?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let (config_save_tx, config_save_rx) = std::sync::mpsc::channel::<String>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, config_save_tx, &config))),
            config,
        };
        app.start_network(rx)?;
        app.start_config_saver(config_save_rx);
        app.start_ui(log_rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to handle config save requests.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) {
        let mut config = self.config.clone();
        std::thread::spawn(move || {
            while let Ok(theme_name) = receiver.recv() {
                config.theme_name = theme_name;
                if let Err(e) = config.save() {
                    error!("Failed to save config: {}", e);
                }
            }
        });
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let submitter = submitter_for(&self.config.submission)?;
        let pacing = self.config.submission.pacing();
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut network_event_handler =
                    NetworkEventHandler::new(&cloned_state, submitter.as_ref(), pacing);
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
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, log_receiver: LogReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run_ui(&mut terminal, &log_receiver).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    async fn run_ui(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        log_receiver: &LogReceiver,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            while let Ok(entry) = log_receiver.try_recv() {
                state.add_log_entry(entry);
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

/// Pick the delivery adapter for the configured endpoint.
///
fn submitter_for(config: &SubmissionConfig) -> AppResult<Box<dyn InquirySubmitter>> {
    match &config.endpoint {
        Some(endpoint) => {
            reqwest::Url::parse(endpoint).map_err(|e| {
                SubmissionError::Other(format!("Invalid endpoint '{}': {}", endpoint, e))
            })?;
            info!("Delivering inquiries to {}.", endpoint);
            Ok(Box::new(HttpSubmitter::new(endpoint)))
        }
        None => {
            info!("No inquiry endpoint configured, inquiries will be logged.");
            Ok(Box::new(LogSubmitter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_submitter_rejects_malformed_endpoint() {
        let config = SubmissionConfig {
            endpoint: Some("not a url".to_string()),
            ..SubmissionConfig::default()
        };
        assert!(matches!(
            submitter_for(&config),
            Err(AppError::Submission(SubmissionError::Other(_)))
        ));
    }

    #[test]
    fn test_submitter_accepts_endpoint_or_none() {
        assert!(submitter_for(&SubmissionConfig::default()).is_ok());
        let config = SubmissionConfig {
            endpoint: Some("https://inexia.example/api/inquiries".to_string()),
            min_delay_ms: 0,
        };
        assert!(submitter_for(&config).is_ok());
    }
}
