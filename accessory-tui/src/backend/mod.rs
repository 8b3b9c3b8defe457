//! Backend layer: async bridge to `accessory-core`
//!
//! Owns a background tokio runtime and the REST client. The update layer
//! requests remote work as `Command`s; each spawned call answers with a
//! `RemoteMessage` on the channel, which the main loop drains every
//! iteration. Calls are fire-and-forget: no dedup, no cancellation, last
//! response wins.

mod config;

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{mpsc, Arc};

use anyhow::Result;
use tokio::runtime::Runtime;

use accessory_core::AccessoryClient;

use crate::message::{Command, RemoteMessage};

pub use config::ApiConfig;

/// Handle to the background runtime and REST client
pub struct Backend {
    runtime: Runtime,
    client: Arc<AccessoryClient>,
    tx: Sender<RemoteMessage>,
    rx: Receiver<RemoteMessage>,
}

impl Backend {
    /// Create the runtime and bind the client to the configured base URL
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let runtime = Runtime::new()?;
        let client = Arc::new(AccessoryClient::new(config.base_url.clone()));
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            client,
            tx,
            rx,
        })
    }

    /// A finished call's result, if one is waiting
    pub fn try_recv(&self) -> Option<RemoteMessage> {
        self.rx.try_recv().ok()
    }

    /// Run a command on the background runtime
    pub fn dispatch(&self, command: Command) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let message = match command {
                Command::LoadAccessories => RemoteMessage::Loaded(client.list().await),
                Command::CreateAccessory(payload) => {
                    RemoteMessage::Created(client.create(&payload).await)
                }
                Command::UpdateAccessory(id, payload) => {
                    RemoteMessage::Updated(client.update(&id, &payload).await)
                }
                Command::DeleteAccessory(id) => {
                    let result = client.delete(&id).await;
                    RemoteMessage::Deleted { id, result }
                }
            };
            // The receiver only disappears on shutdown.
            let _ = tx.send(message);
        });
    }
}
