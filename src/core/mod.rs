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

//! Widget-free shell logic
//!
//! Nothing here builds widgets or needs a display. `settings` uses GIO
//! only to check the application id against GIO's own naming rules.
//!
//! - **`settings`:** compiled-in configuration and its validation
//! - **`lifecycle`:** the `NotStarted → Running → Terminated` state machine
//! - **`greeting`:** what the button writes
//! - **`error`:** `ShellError`

pub mod error;
pub mod greeting;
pub mod lifecycle;
pub mod settings;

pub use error::ShellError;
pub use greeting::{write_greeting, GREETING};
pub use lifecycle::{Lifecycle, LifecycleEvent};
pub use settings::{ShellSettings, APPLICATION_ID, QUIT_ACTION};

#[cfg(test)]
mod tests;
