//! Async task management for background operations
//!
//! Asset key files are read off the render loop so a large file never stalls
//! a frame.

use crate::asset_keys::load_asset_keys;
use crate::types::AssetKey;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages sent from background tasks to the main thread
#[derive(Debug)]
pub enum TaskMessage {
    /// Asset key loading started
    KeysLoadingStarted { file_path: String },

    /// Asset keys loaded successfully
    KeysLoaded {
        keys: Vec<AssetKey>,
        file_path: String,
    },

    /// Asset key loading failed
    KeysLoadError { error: String },
}

/// Manages spawning and communication with background tasks
pub struct AsyncTaskRunner {
    tx: mpsc::UnboundedSender<TaskMessage>,
}

impl AsyncTaskRunner {
    /// Create a new task runner
    pub fn new(tx: mpsc::UnboundedSender<TaskMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task to read and parse an asset key file
    pub fn spawn_load_keys(&self, file_path: String) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move { load_keys_task(file_path, tx).await })
    }
}

async fn load_keys_task(file_path: String, tx: mpsc::UnboundedSender<TaskMessage>) {
    tracing::info!("Starting asset key load task: {}", file_path);

    let _ = tx.send(TaskMessage::KeysLoadingStarted {
        file_path: file_path.clone(),
    });

    let path = PathBuf::from(&file_path);
    let result = tokio::task::spawn_blocking(move || load_asset_keys(&path)).await;

    let msg = match result {
        Ok(Ok(keys)) => TaskMessage::KeysLoaded { keys, file_path },
        Ok(Err(e)) => TaskMessage::KeysLoadError {
            error: e.to_string(),
        },
        Err(e) => TaskMessage::KeysLoadError {
            error: format!("Loader task panicked: {}", e),
        },
    };

    if tx.send(msg).is_err() {
        tracing::debug!("Receiver dropped before asset keys were delivered");
    }
}
