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

//! Layout builder
//!
//! Creates the content of the main window.

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Orientation, TextView};

use crate::core::ShellSettings;

/// Widgets the window and handlers need a handle on
pub struct MainLayout {
    /// Vertical container, set as the window child
    pub container: GtkBox,
    /// Multi-line editor filling the remaining space
    pub text_view: TextView,
    /// Button below the editor
    pub button: Button,
}

/// Builds the main application layout
///
/// Creates a vertical box (no spacing, margins from settings) containing:
/// - A text view expanding in both directions
/// - The button at the bottom
pub fn build_main_layout(settings: &ShellSettings) -> MainLayout {
    let margin = settings.content_margin;

    let container = GtkBox::new(Orientation::Vertical, 0);
    container.set_halign(Align::Fill);
    container.set_valign(Align::Fill);
    container.set_margin_top(margin);
    container.set_margin_bottom(margin);
    container.set_margin_start(margin);
    container.set_margin_end(margin);

    let text_view = TextView::builder()
        .halign(Align::Fill)
        .valign(Align::Fill)
        .hexpand(true)
        .vexpand(true)
        .build();

    let button = Button::builder().label(settings.button_label.as_str()).build();

    container.append(&text_view);
    container.append(&button);

    MainLayout {
        container,
        text_view,
        button,
    }
}
