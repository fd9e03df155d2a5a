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

//! Controller tests
//!
//! Lifecycle bookkeeping and button output, without GTK.

use crate::core::{Lifecycle, ShellSettings};
use crate::ui::Controller;

fn controller() -> Controller {
    Controller::new(ShellSettings::default())
}

#[test]
fn test_controller_starts_not_started() {
    assert_eq!(controller().state(), Lifecycle::NotStarted);
}

#[test]
fn test_first_activation_builds_window() {
    let controller = controller();

    assert!(controller.activate().unwrap(), "First activation should build");
    assert_eq!(controller.state(), Lifecycle::Running);
}

#[test]
fn test_second_activation_reuses_window() {
    let controller = controller();
    controller.activate().unwrap();

    assert!(!controller.activate().unwrap(), "Second activation should not build");
    assert_eq!(controller.state(), Lifecycle::Running);
}

#[test]
fn test_quit_terminates() {
    let controller = controller();
    controller.activate().unwrap();
    controller.request_quit();

    assert_eq!(controller.state(), Lifecycle::Terminated);
}

#[test]
fn test_shutdown_after_quit_is_harmless() {
    let controller = controller();
    controller.activate().unwrap();
    controller.request_quit();
    controller.shutdown();

    assert_eq!(controller.state(), Lifecycle::Terminated);
}

#[test]
fn test_window_close_shutdown_terminates() {
    let controller = controller();
    controller.activate().unwrap();
    controller.shutdown();

    assert_eq!(controller.state(), Lifecycle::Terminated);
}

#[test]
fn test_activation_after_termination_fails() {
    let controller = controller();
    controller.request_quit();

    assert!(controller.activate().is_err());
    assert_eq!(controller.state(), Lifecycle::Terminated);
}

#[test]
fn test_button_click_writes_greeting() {
    let controller = controller();
    controller.activate().unwrap();

    let mut out = Vec::new();
    controller.handle_button_click(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Hello World\n");
    assert_eq!(controller.state(), Lifecycle::Running, "Click must not change state");
}

#[test]
fn test_quit_before_activation_terminates() {
    let controller = controller();
    controller.request_quit();

    assert_eq!(controller.state(), Lifecycle::Terminated);
}

#[test]
fn test_repeated_termination_stays_terminated() {
    let controller = controller();
    controller.shutdown();
    controller.request_quit();
    controller.shutdown();

    assert_eq!(controller.state(), Lifecycle::Terminated);
}

#[test]
fn test_settings_are_kept() {
    let settings = ShellSettings {
        window_title: "Scratch".to_string(),
        ..Default::default()
    };
    let controller = Controller::new(settings.clone());

    assert_eq!(controller.settings(), &settings);
}
