// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller for the application shell
//!
//! The controller owns the only mutable shell state, the lifecycle, and
//! turns GTK callbacks into lifecycle events. It knows nothing about
//! widgets, which keeps it testable without a display.

use std::cell::Cell;
use std::io::Write;

use crate::core::{write_greeting, Lifecycle, LifecycleEvent, ShellError, ShellSettings};

/// Mediates between GTK signals and shell state
///
/// Shared between handlers as `Rc<Controller>`; all callbacks run on the
/// GTK main thread, so a `Cell` is enough.
pub struct Controller {
    settings: ShellSettings,
    state: Cell<Lifecycle>,
}

impl Controller {
    /// Creates a controller in the `NotStarted` state
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            settings,
            state: Cell::new(Lifecycle::NotStarted),
        }
    }

    /// Settings the shell was created with
    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Current lifecycle state
    pub fn state(&self) -> Lifecycle {
        self.state.get()
    }

    /// Records an `activate` signal
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - first activation, the caller must build the window
    /// * `Ok(false)` - already running, the caller should present the
    ///   existing window
    /// * `Err(ShellError)` - the shell has already terminated
    pub fn activate(&self) -> Result<bool, ShellError> {
        let first = self.state() == Lifecycle::NotStarted;
        self.advance(LifecycleEvent::Activate)?;
        Ok(first)
    }

    /// Records a quit request from the `app.quit` action
    pub fn request_quit(&self) {
        self.terminate(LifecycleEvent::Quit);
    }

    /// Records the toolkit's `shutdown` signal
    pub fn shutdown(&self) {
        self.terminate(LifecycleEvent::Shutdown);
    }

    /// Handles a click on the main button
    ///
    /// Writes the greeting to `out`. Shell state is left untouched.
    pub fn handle_button_click<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        tracing::debug!(state = ?self.state(), "button clicked");
        write_greeting(out)?;
        Ok(())
    }

    /// Applies a terminating event; the shell ends `Terminated` even if
    /// the transition table rejects it
    fn terminate(&self, event: LifecycleEvent) {
        if let Err(e) = self.advance(event) {
            tracing::error!(error = %e, ?event, "forcing termination");
            self.state.set(Lifecycle::Terminated);
        }
    }

    fn advance(&self, event: LifecycleEvent) -> Result<Lifecycle, ShellError> {
        let from = self.state.get();
        let to = from.apply(event).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected lifecycle event");
        })?;

        if from != to {
            tracing::info!(?from, ?to, ?event, "lifecycle transition");
        }
        self.state.set(to);
        Ok(to)
    }
}
