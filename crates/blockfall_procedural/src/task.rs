//! # Background Generation
//!
//! Runs a [`TerrainGenerator`] on a worker thread and hands the finished
//! [`GeneratedWorld`] back over a bounded channel.
//!
//! The worker owns the store until the single send. Nothing is shared while
//! generation is in progress, so no locks are involved.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use thiserror::Error;

use crate::terrain::{GeneratedWorld, TerrainGenerator};

/// Errors from the background generation hand-off.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The worker thread could not be started.
    #[error("failed to spawn generation worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// The worker exited without delivering a world.
    #[error("generation worker exited without a result")]
    WorkerLost,

    /// The world was already taken from this task.
    #[error("generated world was already taken")]
    AlreadyTaken,
}

/// Result type for generation hand-off.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Handle to a world being generated in the background.
#[derive(Debug)]
pub struct GenerationTask {
    receiver: Receiver<GeneratedWorld>,
    handle: Option<JoinHandle<()>>,
    taken: bool,
}

impl GenerationTask {
    /// Starts generating on a named worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Spawn`] if the OS refuses the thread.
    pub fn spawn(generator: TerrainGenerator) -> GenerationResult<Self> {
        let (sender, receiver) = bounded(1);

        let handle = thread::Builder::new()
            .name("blockfall-terrain".into())
            .spawn(move || {
                let world = generator.generate();
                if sender.send(world).is_err() {
                    tracing::debug!("generation task dropped before the world was ready");
                }
            })?;

        Ok(Self {
            receiver,
            handle: Some(handle),
            taken: false,
        })
    }

    /// Polls for the finished world without blocking.
    ///
    /// Returns `Ok(None)` while generation is still running.
    ///
    /// # Errors
    ///
    /// [`GenerationError::WorkerLost`] if the worker died, or
    /// [`GenerationError::AlreadyTaken`] after a successful take.
    pub fn try_take(&mut self) -> GenerationResult<Option<GeneratedWorld>> {
        if self.taken {
            return Err(GenerationError::AlreadyTaken);
        }
        match self.receiver.try_recv() {
            Ok(world) => {
                self.finish();
                Ok(Some(world))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.join();
                Err(GenerationError::WorkerLost)
            }
        }
    }

    /// Blocks until the world is ready.
    ///
    /// # Errors
    ///
    /// Same as [`GenerationTask::try_take`].
    pub fn wait(mut self) -> GenerationResult<GeneratedWorld> {
        if self.taken {
            return Err(GenerationError::AlreadyTaken);
        }
        if let Ok(world) = self.receiver.recv() {
            self.finish();
            Ok(world)
        } else {
            self.join();
            Err(GenerationError::WorkerLost)
        }
    }

    fn finish(&mut self) {
        self.taken = true;
        self.join();
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("generation worker panicked");
            }
        }
    }
}
