// Copyright 2018-2019 Matthieu Felix
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

use num_traits::ToPrimitive;

use error::LibraryError;
use primitives::numeric::term_to_integer;
use primitives::Outcome;
use term::Expression;
use Library;

/// `<Arg s.N>`: the N-th command-line argument, counting from 1, as characters. Missing
/// arguments are empty.
pub fn arg(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let first = match e.first() {
        Some(t) if !library.arguments.is_empty() => t,
        _ => return Ok(Outcome::Value(Expression::new())),
    };
    let index = term_to_integer("Arg", first)?;
    let argument = index
        .to_usize()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| library.arguments.get(i));
    Ok(Outcome::Value(match argument {
        Some(a) => Expression::from_chars(a),
        None => Expression::new(),
    }))
}
