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

//! Entry point for the Minerva shell
//!
//! Takes no arguments of its own; everything on the command line goes to
//! GTK. The process exits with the status returned by the event loop.

use anyhow::Context;
use minerva::{core::ShellSettings, ui::App};

fn main() -> anyhow::Result<glib::ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(ShellSettings::default()).context("Failed to create application")?;
    let status = app.run();

    tracing::info!(?status, "event loop finished");
    Ok(status)
}
