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

//! Widget tree and menu model inspection
//!
//! Snapshots of what the shell actually built, used by the
//! `smoke-check` binary and by the menu tests. Checks return a list of
//! human readable failures rather than panicking.

use gtk4::{gio, prelude::*, ApplicationWindow, Button, Widget};

use crate::core::ShellSettings;

/// One item of a menu model, with its submenu if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: Option<String>,
    pub action: Option<String>,
    pub submenu: Vec<MenuEntry>,
}

impl MenuEntry {
    /// Reads every item of `model`, following `submenu` links
    pub fn from_model(model: &impl IsA<gio::MenuModel>) -> Vec<MenuEntry> {
        let model = model.upcast_ref::<gio::MenuModel>();

        (0..model.n_items())
            .map(|index| MenuEntry {
                label: string_attribute(model, index, "label"),
                action: string_attribute(model, index, "action"),
                submenu: model
                    .item_link(index, "submenu")
                    .map(|link| MenuEntry::from_model(&link))
                    .unwrap_or_default(),
            })
            .collect()
    }
}

fn string_attribute(model: &gio::MenuModel, index: i32, attribute: &str) -> Option<String> {
    model
        .item_attribute_value(index, attribute, Some(glib::VariantTy::STRING))
        .and_then(|value| value.get::<String>())
}

/// Checks a menu bar against the single "Menu → Quit" layout
pub fn check_menubar(entries: &[MenuEntry], settings: &ShellSettings) -> Vec<String> {
    let mut failures = Vec::new();

    let [top] = entries else {
        failures.push(format!("expected 1 top-level menu, found {}", entries.len()));
        return failures;
    };

    if top.label.as_deref() != Some(settings.menu_label.as_str()) {
        failures.push(format!("top-level menu label is {:?}", top.label));
    }

    let [quit] = top.submenu.as_slice() else {
        failures.push(format!("expected 1 menu item, found {}", top.submenu.len()));
        return failures;
    };

    if quit.label.as_deref() != Some(settings.quit_label.as_str()) {
        failures.push(format!("menu item label is {:?}", quit.label));
    }
    if quit.action.as_deref() != Some(settings.quit_action_target().as_str()) {
        failures.push(format!("menu item action is {:?}", quit.action));
    }

    failures
}

/// Snapshot of the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowReport {
    pub title: Option<String>,
    pub default_size: (i32, i32),
    pub show_menubar: bool,
    /// GType names of the content box children, top to bottom
    pub children: Vec<String>,
    pub button_labels: Vec<String>,
}

impl WindowReport {
    pub fn from_window(window: &ApplicationWindow) -> Self {
        let children: Vec<Widget> = window
            .child()
            .map(|content| siblings(content.first_child()))
            .unwrap_or_default();

        let button_labels = children
            .iter()
            .filter_map(|w| w.downcast_ref::<Button>())
            .filter_map(|b| b.label().map(|l| l.to_string()))
            .collect();

        Self {
            title: window.title().map(|t| t.to_string()),
            default_size: window.default_size(),
            show_menubar: window.shows_menubar(),
            children: children
                .iter()
                .map(|w| w.type_().name().to_string())
                .collect(),
            button_labels,
        }
    }

    /// Compares the snapshot with what `settings` asks for
    pub fn check(&self, settings: &ShellSettings) -> Vec<String> {
        let mut failures = Vec::new();

        if self.title.as_deref() != Some(settings.window_title.as_str()) {
            failures.push(format!("window title is {:?}", self.title));
        }
        let expected_size = (settings.default_width, settings.default_height);
        if self.default_size != expected_size {
            failures.push(format!(
                "default size is {:?}, expected {:?}",
                self.default_size, expected_size
            ));
        }
        if self.show_menubar != settings.show_menubar {
            failures.push("menubar flag not set".to_string());
        }
        if self.children != ["GtkTextView", "GtkButton"] {
            failures.push(format!("content children are {:?}", self.children));
        }
        if self.button_labels != [settings.button_label.clone()] {
            failures.push(format!("button labels are {:?}", self.button_labels));
        }

        failures
    }
}

fn siblings(first: Option<Widget>) -> Vec<Widget> {
    std::iter::successors(first, |w| w.next_sibling()).collect()
}
