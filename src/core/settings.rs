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

//! Compiled-in shell configuration
//!
//! The shell reads no config files and no environment variables, so every
//! value it needs lives here. `validate()` runs once in `App::new` before
//! anything is handed to GTK.

use gtk4::gio;

use crate::core::error::ShellError;

/// Reverse-domain id the desktop uses to single-instance the app
pub const APPLICATION_ID: &str = "org.gtk.Minerva";
/// Name of the application-scoped quit action
pub const QUIT_ACTION: &str = "quit";

/// Everything the shell needs to build its window and menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub application_id: String,
    pub window_title: String,
    pub default_width: i32,
    pub default_height: i32,
    pub show_menubar: bool,
    /// Applied to all four sides of the content box
    pub content_margin: i32,
    pub menu_label: String,
    pub quit_label: String,
    pub button_label: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            application_id: APPLICATION_ID.to_string(),
            window_title: "Minerva Lisp IDE".to_string(),
            default_width: 800,
            default_height: 600,
            show_menubar: true,
            content_margin: 16,
            menu_label: "Menu".to_string(),
            quit_label: "Quit".to_string(),
            button_label: "Click Me".to_string(),
        }
    }
}

impl ShellSettings {
    /// Checks the settings before they reach the toolkit
    ///
    /// # Errors
    ///
    /// * `InvalidApplicationId` - id fails `g_application_id_is_valid`
    /// * `InvalidWindowSize` - width or height not strictly positive
    /// * `InvalidMargin` - negative margin
    /// * `EmptyLabel` - a title or label is blank
    pub fn validate(&self) -> Result<(), ShellError> {
        if !gio::Application::id_is_valid(&self.application_id) {
            return Err(ShellError::InvalidApplicationId(self.application_id.clone()));
        }

        if self.default_width <= 0 || self.default_height <= 0 {
            return Err(ShellError::InvalidWindowSize {
                width: self.default_width,
                height: self.default_height,
            });
        }

        if self.content_margin < 0 {
            return Err(ShellError::InvalidMargin(self.content_margin));
        }

        let labels = [
            ("window_title", &self.window_title),
            ("menu_label", &self.menu_label),
            ("quit_label", &self.quit_label),
            ("button_label", &self.button_label),
        ];
        for (name, value) in labels {
            if value.trim().is_empty() {
                return Err(ShellError::EmptyLabel(name));
            }
        }

        Ok(())
    }

    /// Detailed action name the quit menu item targets
    pub fn quit_action_target(&self) -> String {
        format!("app.{}", QUIT_ACTION)
    }
}
