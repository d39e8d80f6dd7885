//! Progress reporting for long-running algorithms.
//!
//! A [`Progress`] is handed to [`Algorithm::process`](super::Algorithm::process)
//! and forwards every change as a [`ProgressEvent`] to a callback or a
//! channel. Inside one call the published values never decrease.

use crossbeam_channel::Sender;

use crate::error::{Error, Result};

/// Property name carried by every [`ProgressEvent`].
pub const PROGRESS_PROPERTY: &str = "progress";

/// A single progress change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    /// Always [`PROGRESS_PROPERTY`].
    pub property: &'static str,
    /// Previously published value.
    pub old: f64,
    /// Newly published value, in [0, 1].
    pub new: f64,
}

enum Sink<'a> {
    Silent,
    Callback(Box<dyn FnMut(ProgressEvent) + 'a>),
    Channel(Sender<ProgressEvent>),
}

/// Progress handle passed into algorithm runs.
pub struct Progress<'a> {
    value: f64,
    sink: Sink<'a>,
}

impl Default for Progress<'_> {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for Progress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").field("value", &self.value).finish_non_exhaustive()
    }
}

impl<'a> Progress<'a> {
    /// Creates a handle that records progress without notifying anyone.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            value: 0.0,
            sink: Sink::Silent,
        }
    }

    /// Creates a handle that calls `callback` on every change.
    pub fn from_callback(callback: impl FnMut(ProgressEvent) + 'a) -> Self {
        Self {
            value: 0.0,
            sink: Sink::Callback(Box::new(callback)),
        }
    }

    /// Creates a handle that sends every change over a channel.
    ///
    /// A disconnected receiver is ignored.
    #[must_use]
    pub fn from_channel(sender: Sender<ProgressEvent>) -> Self {
        Self {
            value: 0.0,
            sink: Sink::Channel(sender),
        }
    }

    /// Returns the last published value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Resets to zero at the start of a run. No event is published.
    pub fn begin(&mut self) {
        self.value = 0.0;
    }

    /// Publishes a new value.
    ///
    /// Values not above the current one are accepted but not published.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProgress` if `value` is outside [0, 1] or NaN.
    pub fn set(&mut self, value: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidProgress(value));
        }
        if value <= self.value {
            return Ok(());
        }
        let event = ProgressEvent {
            property: PROGRESS_PROPERTY,
            old: self.value,
            new: value,
        };
        self.value = value;
        match &mut self.sink {
            Sink::Silent => {}
            Sink::Callback(callback) => callback(event),
            Sink::Channel(sender) => {
                let _ = sender.send(event);
            }
        }
        Ok(())
    }

    /// Publishes `done / total`, or completion when `total` is zero.
    #[allow(clippy::cast_precision_loss)] // step counts stay far below 2^52
    pub fn set_fraction(&mut self, done: usize, total: usize) -> Result<()> {
        if total == 0 {
            return self.set(1.0);
        }
        self.set(done.min(total) as f64 / total as f64)
    }

    /// Publishes completion.
    pub fn finish(&mut self) -> Result<()> {
        self.set(1.0)
    }
}
