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

//! GTK4 user interface
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── app.rs          // GTK4 Application setup and signal wiring
//! ├── controller.rs   // Lifecycle state and user intents
//! ├── actions.rs      // GTK action setup (quit)
//! ├── inspect.rs      // Widget tree / menu snapshots
//! └── builders/       // Menu bar and layout builders
//! ```

mod actions;
pub mod app;
pub mod builders;
pub mod controller;
pub mod inspect;

pub use {actions::setup_quit_action, app::App, controller::Controller};

#[cfg(test)]
mod tests;
