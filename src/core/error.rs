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

//! Error types for the application shell

use thiserror::Error;

use crate::core::lifecycle::{Lifecycle, LifecycleEvent};

/// Errors raised while configuring or driving the shell
#[derive(Debug, Error)]
pub enum ShellError {
    /// Application id rejected by GIO's naming rules.
    #[error("Invalid application id: '{0}'")]
    InvalidApplicationId(String),
    /// Window default size must be strictly positive.
    #[error("Invalid window size: {width}x{height}")]
    InvalidWindowSize { width: i32, height: i32 },
    /// Content margin must not be negative.
    #[error("Invalid content margin: {0}")]
    InvalidMargin(i32),
    /// A visible label was empty.
    #[error("Label '{0}' must not be empty")]
    EmptyLabel(&'static str),
    /// Lifecycle event not allowed from the current state.
    #[error("Cannot apply {event:?} while {from:?}")]
    InvalidTransition {
        from: Lifecycle,
        event: LifecycleEvent,
    },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
