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

use error::LibraryError;
use primitives::Outcome;
use term::{Expression, Term};
use util::parse_integer;
use Library;

/// The longest prefix of letters, digits, `-` and `_` of the trimmed text.
pub fn implode_prefix(text: &str) -> &str {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .map_or(trimmed.len(), |(i, _)| i);
    &trimmed[..end]
}

pub fn implode(_library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let word = implode_prefix(&e.to_string()).to_string();
    Ok(Outcome::Value(Expression::single(Term::Word(word))))
}

pub fn numb(_library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    if e.is_empty() {
        return Ok(Outcome::Value(Expression::new()));
    }
    let n = parse_integer("Numb", &e.to_string())?;
    Ok(Outcome::Value(Expression::single(Term::number(&n))))
}
