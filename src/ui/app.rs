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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. The Controller tracks the lifecycle state.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ startup:  quit action + menu bar
//!   ├─ activate: builds (or re-presents) the main window
//!   └─ shutdown: marks the Controller terminated
//! ```

use std::io;
use std::rc::Rc;

use gtk4::{prelude::*, Application, ApplicationWindow};

use crate::core::{ShellError, ShellSettings};
use crate::ui::actions::setup_quit_action;
use crate::ui::builders::{build_main_layout, build_menubar};
use crate::ui::Controller;

/// GTK4 Application for the Minerva shell
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Shared lifecycle controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App from validated settings
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Ready to run
    /// * `Err(ShellError)` - Settings failed validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minerva::core::ShellSettings;
    /// use minerva::ui::App;
    ///
    /// let app = App::new(ShellSettings::default())?;
    /// # Ok::<(), minerva::core::ShellError>(())
    /// ```
    pub fn new(settings: ShellSettings) -> Result<Self, ShellError> {
        settings.validate()?;

        let app = Application::builder()
            .application_id(settings.application_id.as_str())
            .build();

        let controller = Rc::new(Controller::new(settings));

        Ok(Self { app, controller })
    }

    /// Underlying GTK application, for callers that hook extra signals
    pub fn application(&self) -> &Application {
        &self.app
    }

    /// Shared controller, for reading the lifecycle state after `run()`
    pub fn controller(&self) -> Rc<Controller> {
        self.controller.clone()
    }

    /// Runs the GTK4 application
    ///
    /// Process arguments are handed to GTK untouched. Blocks until the
    /// application quits and returns the event loop's exit status.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use minerva::core::ShellSettings;
    /// # use minerva::ui::App;
    /// # let app = App::new(ShellSettings::default())?;
    /// let status = app.run();  // Blocks until quit or window close
    /// # Ok::<(), minerva::core::ShellError>(())
    /// ```
    pub fn run(self) -> glib::ExitCode {
        self.connect_signals();
        self.app.run()
    }

    /// Runs the GTK4 application with an explicit argument list
    ///
    /// Same as `run()`, but GTK sees `args` (program name first) instead
    /// of the process arguments.
    pub fn run_with_args<S: AsRef<str>>(self, args: &[S]) -> glib::ExitCode {
        self.connect_signals();
        self.app.run_with_args(args)
    }

    /// Wires startup, activate and shutdown to the Controller
    fn connect_signals(&self) {
        let controller = self.controller.clone();
        self.app.connect_startup(move |app| {
            Self::on_startup(app, controller.clone());
        });

        let controller = self.controller.clone();
        self.app.connect_activate(move |app| {
            Self::on_activate(app, &controller);
        });

        let controller = self.controller.clone();
        self.app.connect_shutdown(move |_| {
            controller.shutdown();
        });
    }

    /// Installs the quit action and the menu bar
    fn on_startup(app: &Application, controller: Rc<Controller>) {
        tracing::debug!("startup");

        let menubar = build_menubar(controller.settings());
        setup_quit_action(app, controller);
        app.set_menubar(Some(&menubar));
    }

    fn on_activate(app: &Application, controller: &Rc<Controller>) {
        match controller.activate() {
            Ok(true) => Self::build_ui(app, controller.clone()),
            Ok(false) => {
                // Keep a single window: bring the existing one forward
                if let Some(window) = app.active_window() {
                    window.present();
                }
            }
            Err(e) => tracing::error!(error = %e, "activation ignored"),
        }
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        let settings = controller.settings();
        let layout = build_main_layout(settings);

        let window = ApplicationWindow::builder()
            .application(app)
            .title(settings.window_title.as_str())
            .default_width(settings.default_width)
            .default_height(settings.default_height)
            .show_menubar(settings.show_menubar)
            .child(&layout.container)
            .build();

        let controller_for_click = controller.clone();
        layout.button.connect_clicked(move |_| {
            let mut stdout = io::stdout().lock();
            if let Err(e) = controller_for_click.handle_button_click(&mut stdout) {
                tracing::error!(error = %e, "failed to write greeting");
            }
        });

        tracing::info!(title = %settings.window_title, "main window ready");
        window.present();
    }
}
