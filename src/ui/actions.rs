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

//! GTK action setup for the application

use std::rc::Rc;

use gtk4::{gio, prelude::*};

use crate::core::QUIT_ACTION;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Registers a parameterless `quit` action on `app`. Activating it marks
/// the controller terminated and stops the event loop, so `run()` returns.
/// The action only keeps a weak reference to the application it lives on.
pub fn setup_quit_action(app: &impl IsA<gio::Application>, controller: Rc<Controller>) {
    let quit_action = gio::SimpleAction::new(QUIT_ACTION, None);
    let app_for_quit = app.upcast_ref::<gio::Application>().downgrade();

    quit_action.connect_activate(move |_, _| {
        tracing::info!("quit requested");
        controller.request_quit();

        if let Some(app) = app_for_quit.upgrade() {
            app.quit();
        }
    });

    app.upcast_ref::<gio::Application>().add_action(&quit_action);
}
