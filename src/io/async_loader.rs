//! Asynchronous novel file loading.
//!
//! Novel files are parsed in a background thread so the GUI stays responsive
//! while large books load.

use eframe::egui;
use rnovel::{Novel, NovelReader, SampleNovel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::io::LoadingState;

/// Result of a completed novel loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded novel
        novel: Novel,
        /// Path to the file that was loaded (None for sample novels)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of novel files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Novel, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a novel file asynchronously from the specified path.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the novel file to load
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        thread::spawn(move || {
            let reader = NovelReader::new();
            let result = reader.read(&path_string).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates a sample novel in-memory.
    ///
    /// Generation is fast and deterministic, so it runs synchronously.
    pub fn load_sample_novel(&self) -> Novel {
        SampleNovel::new().generate()
    }

    /// Checks whether a background load has finished and takes its result.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.loading_receiver = None;
                let path = self.pending_load_path.take();
                match result {
                    Ok(novel) => LoadResult::Success { novel, path },
                    Err(message) => LoadResult::Error(message),
                }
            }
            Err(TryRecvError::Empty) => LoadResult::None,
            Err(TryRecvError::Disconnected) => {
                self.loading_receiver = None;
                self.pending_load_path = None;
                LoadResult::Error("Loading thread terminated unexpectedly".to_string())
            }
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
