//! Application state for the web layer.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::store::DataContext;

use super::routes::AppError;

/// Outcome of the one-time dataset load.
#[derive(Debug)]
enum LoadState {
    Ready(DataContext),
    Failed(String),
}

/// Where the dataset load stands, as reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Shared application state.
///
/// The dataset is loaded in the background after the listener is up; until it
/// is published, data endpoints answer "not ready". A failed load is
/// recorded and reported as such; it never turns back into "loading".
#[derive(Clone)]
pub struct AppState {
    /// Load outcome, set exactly once
    data: Arc<OnceLock<LoadState>>,

    /// Directory of static frontend assets
    static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a state whose dataset has not been loaded yet.
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            data: Arc::new(OnceLock::new()),
            static_dir: Arc::new(static_dir.into()),
        }
    }

    /// Create a state with an already loaded dataset.
    pub fn with_data(data: DataContext, static_dir: impl Into<PathBuf>) -> Self {
        let state = Self::new(static_dir);
        state.publish(data);
        state
    }

    /// Publish the loaded dataset.
    ///
    /// Returns `false` if a load outcome was already recorded.
    pub fn publish(&self, data: DataContext) -> bool {
        self.data.set(LoadState::Ready(data)).is_ok()
    }

    /// Record that loading failed.
    ///
    /// Returns `false` if a load outcome was already recorded.
    pub fn fail(&self, message: impl Into<String>) -> bool {
        self.data.set(LoadState::Failed(message.into())).is_ok()
    }

    pub fn status(&self) -> LoadStatus {
        match self.data.get() {
            None => LoadStatus::Loading,
            Some(LoadState::Ready(_)) => LoadStatus::Ready,
            Some(LoadState::Failed(_)) => LoadStatus::Failed,
        }
    }

    /// The loaded dataset, or why it is unavailable.
    pub fn data(&self) -> Result<&DataContext, AppError> {
        match self.data.get() {
            None => Err(AppError::NotReady),
            Some(LoadState::Ready(data)) => Ok(data),
            Some(LoadState::Failed(message)) => Err(AppError::LoadFailed {
                message: message.clone(),
            }),
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
