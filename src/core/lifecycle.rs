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

//! Application lifecycle state machine
//!
//! ```text
//! NotStarted ──Activate──▶ Running ──Quit/Shutdown──▶ Terminated
//! ```
//!
//! Nothing leaves `Terminated`. Quit and shutdown both arrive when the
//! user picks "Quit" (the action fires, then the application shuts down),
//! so repeating them on a terminated shell is a no-op.

use crate::core::error::ShellError;

/// Where the shell is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Process started, no window yet
    #[default]
    NotStarted,
    /// Window built and event loop dispatching
    Running,
    /// Quit requested or application shut down
    Terminated,
}

/// Events that move the lifecycle forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The toolkit emitted `activate`
    Activate,
    /// The `app.quit` action was invoked
    Quit,
    /// The toolkit emitted `shutdown` (last window closed or quit)
    Shutdown,
}

impl Lifecycle {
    /// Returns the state reached by applying `event`
    ///
    /// # Errors
    ///
    /// `ShellError::InvalidTransition` when activating a terminated shell.
    pub fn apply(self, event: LifecycleEvent) -> Result<Self, ShellError> {
        match (self, event) {
            (Lifecycle::Terminated, LifecycleEvent::Activate) => {
                Err(ShellError::InvalidTransition { from: self, event })
            }
            (_, LifecycleEvent::Activate) => Ok(Lifecycle::Running),
            (_, LifecycleEvent::Quit | LifecycleEvent::Shutdown) => Ok(Lifecycle::Terminated),
        }
    }

    /// True once the shell can no longer be activated
    pub fn is_terminal(self) -> bool {
        self == Lifecycle::Terminated
    }
}
