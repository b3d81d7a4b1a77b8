//! Image selection capability
//!
//! The editor never talks to a picker directly. A pick is dispatched onto the
//! tokio runtime, and its completion comes back through a channel that the UI
//! thread drains once per frame.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::constants::media;

/// Where a picked image ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Cover,
    Primary,
    Gallery,
}

impl ImageSlot {
    pub fn dialog_title(self) -> &'static str {
        match self {
            ImageSlot::Cover => "Choose a cover image",
            ImageSlot::Primary => "Choose a profile photo",
            ImageSlot::Gallery => "Add a photo to the gallery",
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageSlot::Cover => "cover",
            ImageSlot::Primary => "primary",
            ImageSlot::Gallery => "gallery",
        };
        f.write_str(name)
    }
}

/// Ticket for one in-flight pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    pub id: u64,
    pub slot: ImageSlot,
}

/// Completed pick; `uri` is `None` when the user cancelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub request: ImageRequest,
    pub uri: Option<String>,
}

/// Yields zero or one resource locator per request
#[async_trait]
pub trait MediaPicker: Send + Sync {
    async fn request_image(&self, slot: ImageSlot) -> Option<String>;
}

/// Native file dialog picker
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDialogPicker;

#[async_trait]
impl MediaPicker for FileDialogPicker {
    async fn request_image(&self, slot: ImageSlot) -> Option<String> {
        let handle = rfd::AsyncFileDialog::new()
            .set_title(slot.dialog_title())
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .pick_file()
            .await?;
        Some(format!(
            "{}{}",
            media::FILE_URI_SCHEME,
            handle.path().display()
        ))
    }
}

/// Runs picks on a runtime and queues their completions for the UI thread
pub struct MediaBridge {
    picker: Arc<dyn MediaPicker>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<ImageSelection>,
    rx: mpsc::UnboundedReceiver<ImageSelection>,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl MediaBridge {
    pub fn new(picker: Arc<dyn MediaPicker>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            picker,
            runtime,
            tx,
            rx,
            notify: None,
        }
    }

    /// Callback run after each completion is queued (e.g. request a repaint)
    pub fn set_notifier(&mut self, notify: impl Fn() + Send + Sync + 'static) {
        self.notify = Some(Arc::new(notify));
    }

    /// Start a pick; any number may be in flight at once
    pub fn dispatch(&self, request: ImageRequest) {
        let picker = Arc::clone(&self.picker);
        let tx = self.tx.clone();
        let notify = self.notify.clone();

        self.runtime.spawn(async move {
            let uri = picker.request_image(request.slot).await;
            debug!(id = request.id, slot = %request.slot, picked = uri.is_some(), "Image pick finished");

            if tx.send(ImageSelection { request, uri }).is_err() {
                debug!(id = request.id, "Editor gone, dropping image selection");
                return;
            }
            if let Some(notify) = notify {
                notify();
            }
        });
    }

    /// Completions queued since the last call, in completion order
    pub fn drain(&mut self) -> Vec<ImageSelection> {
        let mut done = Vec::new();
        while let Ok(selection) = self.rx.try_recv() {
            done.push(selection);
        }
        done
    }
}

impl fmt::Debug for MediaBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBridge")
            .field("has_notifier", &self.notify.is_some())
            .finish_non_exhaustive()
    }
}

/// Picker that replays queued results, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    results: std::sync::Mutex<std::collections::VecDeque<Option<String>>>,
}

#[cfg(test)]
impl ScriptedPicker {
    pub fn new(results: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        let results = results
            .into_iter()
            .map(|uri| uri.map(str::to_string))
            .collect();
        Self {
            results: std::sync::Mutex::new(results),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl MediaPicker for ScriptedPicker {
    async fn request_image(&self, _slot: ImageSlot) -> Option<String> {
        self.results.lock().unwrap().pop_front().flatten()
    }
}
