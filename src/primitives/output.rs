// Copyright 2018-2020 Matthieu Felix
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use error::LibraryError;
use primitives::Outcome;
use term::Expression;
use Library;

/// Writes the rendering of its argument as a line, and returns the argument.
pub fn print(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    library.write_line(&e.to_string())?;
    Ok(Outcome::Value(e.clone()))
}

/// Like `print`, but the call has no value.
pub fn prout(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    library.write_line(&e.to_string())?;
    Ok(Outcome::NoResult)
}
