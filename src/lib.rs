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

//! Minerva
//!
//! Application shell for the Minerva Lisp IDE: one GTK4 window with a
//! text area and a button, and a menu bar whose only command is Quit.
//!
//! # Architecture
//!
//! - **`core`:** Widget-free pieces (settings, lifecycle, greeting, errors)
//! - **`ui`:** GTK4 glue (application wrapper, controller, actions, builders)
//!
//! # Examples
//!
//! ## Running the shell
//!
//! ```no_run
//! use minerva::core::ShellSettings;
//! use minerva::ui::App;
//!
//! let app = App::new(ShellSettings::default())?;
//! let status = app.run(); // Blocks until quit or window close
//! # Ok::<(), minerva::core::ShellError>(())
//! ```
//!
//! ## Inspecting the menu model
//!
//! ```
//! use minerva::core::ShellSettings;
//! use minerva::ui::builders::build_menubar;
//! use minerva::ui::inspect::{check_menubar, MenuEntry};
//!
//! let settings = ShellSettings::default();
//! let entries = MenuEntry::from_model(&build_menubar(&settings));
//! assert!(check_menubar(&entries, &settings).is_empty());
//! ```

pub mod core;
pub mod ui;

pub use core::{Lifecycle, ShellError, ShellSettings};
