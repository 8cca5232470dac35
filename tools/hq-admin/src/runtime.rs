//! Executes view commands off the UI loop.

use std::sync::Arc;

use hq_service::HospitalService;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::{execute, Command, Completion};

/// Spawns one task per command and sends each completion back to the loop.
#[derive(Clone)]
pub struct Dispatcher {
    service: Arc<dyn HospitalService>,
    completions: mpsc::UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn new(
        service: Arc<dyn HospitalService>,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (completions, rx) = mpsc::unbounded_channel();
        (
            Self {
                service,
                completions,
            },
            rx,
        )
    }

    pub fn dispatch(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            let service = Arc::clone(&self.service);
            let tx = self.completions.clone();
            tokio::spawn(async move {
                let completion = execute(&*service, command).await;
                if tx.send(completion).is_err() {
                    debug!("UI loop gone; dropping completion");
                }
            });
        }
    }
}
