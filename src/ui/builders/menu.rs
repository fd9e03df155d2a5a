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

//! Menu bar builder
//!
//! Creates the application menu model registered during `startup`.

use gtk4::gio::{Menu, MenuItem};

use crate::core::ShellSettings;

/// Builds the application menu bar
///
/// ```text
/// Menu
/// └── Quit   (app.quit)
/// ```
///
/// The model only references the action by name; `setup_quit_action`
/// must register `quit` on the same application.
pub fn build_menubar(settings: &ShellSettings) -> Menu {
    let menu = Menu::new();
    menu.append_item(&MenuItem::new(
        Some(&settings.quit_label),
        Some(&settings.quit_action_target()),
    ));

    let menubar = Menu::new();
    menubar.append_item(&MenuItem::new_submenu(Some(&settings.menu_label), &menu));

    menubar
}
