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

//! Menu bar tests
//!
//! `gio::Menu` is a plain GObject, so the model can be checked without
//! a display connection.

use crate::core::ShellSettings;
use crate::ui::builders::build_menubar;
use crate::ui::inspect::{check_menubar, MenuEntry};

#[test]
fn test_menubar_has_single_menu_with_quit() {
    let settings = ShellSettings::default();
    let entries = MenuEntry::from_model(&build_menubar(&settings));

    assert_eq!(
        entries,
        vec![MenuEntry {
            label: Some("Menu".to_string()),
            action: None,
            submenu: vec![MenuEntry {
                label: Some("Quit".to_string()),
                action: Some("app.quit".to_string()),
                submenu: vec![],
            }],
        }]
    );
}

#[test]
fn test_check_menubar_accepts_built_menu() {
    let settings = ShellSettings::default();
    let entries = MenuEntry::from_model(&build_menubar(&settings));

    assert!(check_menubar(&entries, &settings).is_empty());
}

#[test]
fn test_check_menubar_reports_extra_items() {
    let settings = ShellSettings::default();
    let mut entries = MenuEntry::from_model(&build_menubar(&settings));
    let quit = entries[0].submenu[0].clone();
    entries[0].submenu.push(quit);

    let failures = check_menubar(&entries, &settings);
    assert_eq!(failures, vec!["expected 1 menu item, found 2".to_string()]);
}

#[test]
fn test_check_menubar_reports_empty_bar() {
    let failures = check_menubar(&[], &ShellSettings::default());
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("found 0"));
}

#[test]
fn test_menubar_uses_configured_labels() {
    let settings = ShellSettings {
        menu_label: "File".to_string(),
        quit_label: "Exit".to_string(),
        ..Default::default()
    };
    let entries = MenuEntry::from_model(&build_menubar(&settings));

    assert_eq!(entries[0].label.as_deref(), Some("File"));
    assert_eq!(entries[0].submenu[0].label.as_deref(), Some("Exit"));
    assert_eq!(entries[0].submenu[0].action.as_deref(), Some("app.quit"));
}
