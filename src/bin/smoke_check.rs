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

//! Manual smoke check of the running shell
//!
//! Needs a display. Launches the shell, waits for the main window,
//! checks it and the menu bar, clicks the button, then ends the
//! application either through `app.quit` (default) or by closing the
//! window (`--close`) and reports.

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use gtk4::{prelude::*, ApplicationWindow, Button};
use minerva::core::{Lifecycle, ShellSettings};
use minerva::ui::inspect::{check_menubar, MenuEntry, WindowReport};
use minerva::ui::{App, Controller};

#[derive(Parser)]
#[command(name = "smoke-check")]
#[command(about = "Launch the Minerva shell, check it and shut it down")]
struct Cli {
    /// End the run by closing the window instead of invoking app.quit
    #[arg(long)]
    close: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = ShellSettings::default();
    let app = match App::new(settings.clone()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to create application: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let gtk_app = app.application().clone();
    let controller = app.controller();
    let failures = Rc::new(RefCell::new(Vec::<String>::new()));

    let close = cli.close;
    let failures_for_check = failures.clone();
    let controller_for_check = controller.clone();
    gtk_app.connect_activate(move |gtk_app| {
        let gtk_app = gtk_app.clone();
        let settings = settings.clone();
        let failures = failures_for_check.clone();
        let controller = controller_for_check.clone();

        // Runs after the shell's own activate handler has built the window
        glib::idle_add_local_once(move || {
            println!("=== Minerva smoke check ===\n");
            let mut found = Vec::new();

            let windows = gtk_app.windows();
            println!("Windows: {}", windows.len());
            if windows.len() != 1 {
                found.push(format!("expected 1 window, found {}", windows.len()));
            }

            let window = windows
                .first()
                .and_then(|w| w.downcast_ref::<ApplicationWindow>())
                .cloned();

            match &window {
                Some(window) => {
                    let report = WindowReport::from_window(window);
                    println!("Window: {:?}", report);
                    found.extend(report.check(&settings));
                    found.extend(click_button(window, &controller));
                }
                None => found.push("no application window".to_string()),
            }

            match gtk_app.menubar() {
                Some(model) => {
                    let entries = MenuEntry::from_model(&model);
                    println!("Menu bar: {:?}", entries);
                    found.extend(check_menubar(&entries, &settings));
                }
                None => found.push("no menu bar registered".to_string()),
            }

            failures.borrow_mut().extend(found);

            match (close, window) {
                (true, Some(window)) => {
                    println!("\nClosing the main window");
                    window.close();
                }
                (true, None) => {
                    failures
                        .borrow_mut()
                        .push("nothing to close, falling back to app.quit".to_string());
                    gtk_app.activate_action("quit", None);
                }
                (false, _) => {
                    println!("\nTriggering app.quit");
                    gtk_app.activate_action("quit", None);
                }
            }
        });
    });

    // The flag is ours; GTK gets only the program name
    let status = app.run_with_args(&["smoke-check"]);

    let failures = failures.borrow();
    for failure in failures.iter() {
        println!("  ✗ {}", failure);
    }
    if controller.state() != Lifecycle::Terminated {
        println!("  ✗ lifecycle ended in {:?}", controller.state());
        return ExitCode::FAILURE;
    }
    if status != glib::ExitCode::SUCCESS {
        println!("  ✗ event loop returned {:?}", status);
        return ExitCode::FAILURE;
    }

    if failures.is_empty() {
        println!("=== All smoke checks passed ===");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Clicks the content box button through GTK and checks nothing changed
fn click_button(window: &ApplicationWindow, controller: &Controller) -> Vec<String> {
    let button = window
        .child()
        .and_then(|content| {
            std::iter::successors(content.first_child(), |w| w.next_sibling())
                .find_map(|w| w.downcast::<Button>().ok())
        });

    let Some(button) = button else {
        return vec!["no button to click".to_string()];
    };

    println!("Clicking '{}' (expect the greeting on stdout)", button.label().unwrap_or_default());
    button.emit_clicked();

    if controller.state() == Lifecycle::Running {
        Vec::new()
    } else {
        vec![format!("click changed lifecycle to {:?}", controller.state())]
    }
}
