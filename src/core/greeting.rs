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

//! Output of the "Click Me" button

use std::io::{self, Write};

/// Line written for each button click
pub const GREETING: &str = "Hello World";

/// Writes the greeting and a trailing newline to `out`
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)?;
    out.flush()
}
