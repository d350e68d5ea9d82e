use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::tasks::{Simulator, TaskOutcome};
use crate::ui::{install_panic_hook, TerminalGuard, WizardResult, WizardScreen};

/// Top-level TUI application: owns the wizard and the task outcome channel
pub struct App {
    config: Config,
    wizard: WizardScreen,
    task_rx: mpsc::UnboundedReceiver<TaskOutcome>,
    should_quit: bool,
    /// Printed after the terminal is restored
    exit_message: Option<String>,
}

impl App {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let (simulator, task_rx) = Simulator::new(&config.simulate);
        let wizard = WizardScreen::new(catalog, simulator);
        Self {
            config,
            wizard,
            task_rx,
            should_quit: false,
            exit_message: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let _guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.wizard.render(f))?;

            // Feed completed simulated operations back into the wizard
            while let Ok(outcome) = self.task_rx.try_recv() {
                self.wizard.apply_outcome(outcome);
            }

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.wizard.handle_key(key) {
                            WizardResult::Continue => {}
                            WizardResult::Cancel => {
                                tracing::info!("wizard cancelled");
                                self.should_quit = true;
                            }
                            WizardResult::Launch(summary) => {
                                tracing::info!("campaign launched");
                                self.exit_message = Some(summary);
                                self.should_quit = true;
                            }
                        }
                    }
                }
            }
        }

        drop(_guard);

        if let Some(message) = &self.exit_message {
            println!("{}", message);
        }

        Ok(())
    }
}
