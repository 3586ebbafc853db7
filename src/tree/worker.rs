//! Background rendering for front ends that must stay responsive
//!
//! The renderer runs on its own thread and streams lines through a bounded
//! channel. The consumer polls the channel from its event loop and stops the
//! producer through a shared `CancelToken`.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread::{self, JoinHandle};

use super::cancel::CancelToken;
use super::config::TraversalConfig;
use super::line::{Completion, TreeLine};
use super::render::{LineSink, TreeRenderer};

const CHANNEL_CAPACITY: usize = 1024;

/// Messages sent from the render thread.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    Line(TreeLine),
    /// Traversal ended, either fully or by cancellation
    Finished(Completion),
    /// The render could not start, e.g. the root is not a directory
    Failed(String),
}

/// Forwards lines into the channel. A closed channel cancels the render.
struct ChannelSink {
    tx: SyncSender<RenderEvent>,
    cancel: CancelToken,
}

impl LineSink for ChannelSink {
    fn line(&mut self, line: TreeLine) -> io::Result<()> {
        if self.tx.send(RenderEvent::Line(line)).is_err() {
            tracing::debug!("render event receiver dropped, cancelling");
            self.cancel.cancel();
        }
        Ok(())
    }
}

/// Handle to a render running on a worker thread.
pub struct RenderWorker {
    rx: Receiver<RenderEvent>,
    cancel: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl RenderWorker {
    /// Start rendering `config` on a new thread.
    pub fn spawn(config: TraversalConfig) -> io::Result<Self> {
        Self::spawn_with_cancel(config, CancelToken::new())
    }

    /// Start rendering on a new thread, stopping when `cancel` is set.
    pub fn spawn_with_cancel(config: TraversalConfig, cancel: CancelToken) -> io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel(CHANNEL_CAPACITY);

        let worker_cancel = cancel.clone();
        let handle = thread::Builder::new()
            .name("dirtree-render".to_string())
            .spawn(move || run(config, tx, worker_cancel))?;

        Ok(Self {
            rx,
            cancel,
            handle: Some(handle),
        })
    }

    /// Ask the worker to stop. Lines already queued are still delivered.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Blocking iterator over events; ends after the final event.
    pub fn events(&self) -> impl Iterator<Item = RenderEvent> + '_ {
        self.rx.iter()
    }

    /// Next event without blocking, for polling from an event loop.
    ///
    /// `Err(TryRecvError::Empty)` means nothing is queued yet;
    /// `Err(TryRecvError::Disconnected)` means the worker has exited and every
    /// event has been consumed.
    pub fn try_next(&self) -> Result<RenderEvent, TryRecvError> {
        self.rx.try_recv()
    }

    /// Wait for the worker thread to exit. Undelivered events are discarded.
    pub fn join(self) {
        let RenderWorker { rx, handle, .. } = self;
        // A producer blocked on a full channel wakes up once the receiver is gone
        drop(rx);
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::warn!("render worker panicked");
            }
        }
    }
}

fn run(config: TraversalConfig, tx: SyncSender<RenderEvent>, cancel: CancelToken) {
    tracing::info!(root = %config.root.display(), "render worker started");

    let renderer = TreeRenderer::new(config).with_cancel_token(cancel.clone());
    let mut sink = ChannelSink {
        tx: tx.clone(),
        cancel,
    };

    let event = match renderer.render_to(&mut sink) {
        Ok(completion) => {
            tracing::info!(
                cancelled = completion.is_cancelled(),
                directories = completion.result().directories,
                files = completion.result().files,
                "render worker finished"
            );
            RenderEvent::Finished(completion)
        }
        Err(e) => RenderEvent::Failed(e.to_string()),
    };

    // The receiver may already be gone; nothing left to report to.
    let _ = tx.send(event);
}
