//! Simulated asynchronous operations.
//!
//! Scans, email generation, and file uploads stand in for future network/AI
//! calls. Each schedules a [`TaskOutcome`] on a channel after a configurable
//! delay and always succeeds. The wizard drains outcomes once per tick; if
//! the receiver is gone (wizard disposed), completions are silently dropped.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::SimulateConfig;

/// Completion message from a simulated operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Campaign info scan finished
    ScanComplete,
    /// Email draft generation finished
    EmailDraftComplete,
    /// A simulated upload advanced to the given percentage
    UploadProgress { file_id: u64, progress: u8 },
    /// A simulated upload finished
    UploadComplete { file_id: u64 },
}

/// Schedules simulated operations and reports their outcomes.
///
/// Delays come from config so tests can inject zero-length ones.
pub struct Simulator {
    tx: mpsc::UnboundedSender<TaskOutcome>,
    scan_delay: Duration,
    generate_delay: Duration,
    upload_step_delay: Duration,
    upload_steps: u8,
}

impl Simulator {
    /// Create a simulator and the receiver the app loop drains
    pub fn new(config: &SimulateConfig) -> (Self, mpsc::UnboundedReceiver<TaskOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let simulator = Self {
            tx,
            scan_delay: Duration::from_millis(config.scan_ms),
            generate_delay: Duration::from_millis(config.generate_ms),
            upload_step_delay: Duration::from_millis(config.upload_step_ms),
            upload_steps: config.upload_steps.max(1),
        };
        (simulator, rx)
    }

    /// Schedule a campaign info scan
    pub fn begin_scan(&self) {
        let tx = self.tx.clone();
        let delay = self.scan_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the wizard was disposed; drop the outcome
            let _ = tx.send(TaskOutcome::ScanComplete);
        });
    }

    /// Schedule email draft generation
    pub fn begin_generate_email(&self) {
        let tx = self.tx.clone();
        let delay = self.generate_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(TaskOutcome::EmailDraftComplete);
        });
    }

    /// Schedule a simulated file upload that ticks to 100% then completes
    pub fn begin_upload(&self, file_id: u64) {
        let tx = self.tx.clone();
        let delay = self.upload_step_delay;
        let steps = self.upload_steps;
        tokio::spawn(async move {
            for step in 1..=steps {
                tokio::time::sleep(delay).await;
                let progress = (u16::from(step) * 100 / u16::from(steps)) as u8;
                if tx.send(TaskOutcome::UploadProgress { file_id, progress }).is_err() {
                    return;
                }
            }
            let _ = tx.send(TaskOutcome::UploadComplete { file_id });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_delay_config() -> SimulateConfig {
        SimulateConfig {
            scan_ms: 0,
            generate_ms: 0,
            upload_step_ms: 0,
            upload_steps: 5,
        }
    }

    #[tokio::test]
    async fn test_scan_sends_completion() {
        let (simulator, mut rx) = Simulator::new(&zero_delay_config());
        simulator.begin_scan();
        assert_eq!(rx.recv().await, Some(TaskOutcome::ScanComplete));
    }

    #[tokio::test]
    async fn test_generate_sends_completion() {
        let (simulator, mut rx) = Simulator::new(&zero_delay_config());
        simulator.begin_generate_email();
        assert_eq!(rx.recv().await, Some(TaskOutcome::EmailDraftComplete));
    }

    #[tokio::test]
    async fn test_upload_progresses_to_completion() {
        let (simulator, mut rx) = Simulator::new(&zero_delay_config());
        simulator.begin_upload(7);

        let mut last_progress = 0;
        loop {
            match rx.recv().await.unwrap() {
                TaskOutcome::UploadProgress { file_id, progress } => {
                    assert_eq!(file_id, 7);
                    assert!(progress > last_progress);
                    last_progress = progress;
                }
                TaskOutcome::UploadComplete { file_id } => {
                    assert_eq!(file_id, 7);
                    break;
                }
                other => panic!("unexpected outcome: {:?}", other),
            }
        }
        assert_eq!(last_progress, 100);
    }

    #[tokio::test]
    async fn test_dropped_receiver_discards_outcomes() {
        let (simulator, rx) = Simulator::new(&zero_delay_config());
        drop(rx);
        // Must not panic when the wizard is gone
        simulator.begin_scan();
        simulator.begin_upload(1);
        tokio::task::yield_now().await;
    }
}
