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

//! Lifecycle state machine tests
//!
//! Covers every cell of the transition table, including the one
//! forbidden move (activating a terminated shell).

use crate::core::{Lifecycle, LifecycleEvent, ShellError};

#[test]
fn test_default_is_not_started() {
    assert_eq!(Lifecycle::default(), Lifecycle::NotStarted);
}

#[test]
fn test_activate_starts_running() {
    let state = Lifecycle::NotStarted.apply(LifecycleEvent::Activate).unwrap();
    assert_eq!(state, Lifecycle::Running);
}

#[test]
fn test_reactivation_stays_running() {
    let state = Lifecycle::Running.apply(LifecycleEvent::Activate).unwrap();
    assert_eq!(state, Lifecycle::Running);
}

#[test]
fn test_quit_and_shutdown_terminate_from_any_state() {
    for from in [Lifecycle::NotStarted, Lifecycle::Running, Lifecycle::Terminated] {
        for event in [LifecycleEvent::Quit, LifecycleEvent::Shutdown] {
            let state = from.apply(event).unwrap();
            assert_eq!(state, Lifecycle::Terminated, "{:?} + {:?}", from, event);
        }
    }
}

#[test]
fn test_activate_after_termination_is_rejected() {
    let result = Lifecycle::Terminated.apply(LifecycleEvent::Activate);

    match result {
        Err(ShellError::InvalidTransition { from, event }) => {
            assert_eq!(from, Lifecycle::Terminated);
            assert_eq!(event, LifecycleEvent::Activate);
        }
        other => panic!("Expected InvalidTransition, got {:?}", other),
    }
}

#[test]
fn test_only_terminated_is_terminal() {
    assert!(!Lifecycle::NotStarted.is_terminal());
    assert!(!Lifecycle::Running.is_terminal());
    assert!(Lifecycle::Terminated.is_terminal());
}
