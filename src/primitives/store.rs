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

use std::collections::HashMap;

use error::LibraryError;
use pattern::{split_at_symbol, Match};
use primitives::Outcome;
use term::{Expression, Term};
use Library;

#[derive(Debug, Clone, Default)]
struct Slot {
    key: Option<Expression>,
    value: Option<Expression>,
}

/// The Bury/Dig store, keyed by the rendering of the key expression.
///
/// Slots are cleared, never removed, and keep the position of the first time their key was
/// buried, so `dig_all` yields entries in that order.
#[derive(Debug, Default)]
pub struct BuryStore {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl BuryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bury(&mut self, key: Expression, value: Expression) {
        let rendered = key.to_string();
        debug!("burying under {:?}", rendered);
        let slots = &mut self.slots;
        let at = *self.index.entry(rendered).or_insert_with(|| {
            slots.push(Slot::default());
            slots.len() - 1
        });
        self.slots[at] = Slot {
            key: Some(key),
            value: Some(value),
        };
    }

    /// Takes the value buried under `rendered_key` out of the store.
    pub fn dig(&mut self, rendered_key: &str) -> Option<Expression> {
        let at = *self.index.get(rendered_key)?;
        let slot = &mut self.slots[at];
        let value = slot.value.take()?;
        slot.key = None;
        debug!("dug up {:?}", rendered_key);
        Some(value)
    }

    /// Empties the store, returning the live `(key, value)` pairs in burial order.
    pub fn dig_all(&mut self) -> Vec<(Expression, Expression)> {
        self.slots
            .iter_mut()
            .filter_map(|slot| match (slot.key.take(), slot.value.take()) {
                (Some(k), Some(v)) => Some((k, v)),
                _ => None,
            })
            .collect()
    }

    pub fn live_entries(&self) -> usize {
        self.slots.iter().filter(|s| s.value.is_some()).count()
    }
}

/// `<Br e.N '=' e.Expr>`, where `e.N` holds no `=` at the top level of its brackets.
pub fn bury(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    match split_at_symbol(e, &Term::Character('=')) {
        Match::Matched((key, value)) => {
            library.store.bury(
                Expression::from_balanced(key.to_vec()),
                Expression::from_balanced(value.to_vec()),
            );
            Ok(Outcome::Value(Expression::new()))
        }
        Match::NoMatch => Err(LibraryError::MatchFailure {
            builtin: "Br",
            shape: "e.N '=' e.Expr",
        }),
    }
}

/// `<Dg e.N>`
pub fn dig(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let rendered = e.to_string();
    match library.store.dig(&rendered) {
        Some(value) => Ok(Outcome::Value(value)),
        None => Err(LibraryError::KeyNotFound(rendered)),
    }
}

/// `<Dgall>`: every buried pair as `(e.N '=' e.Expr)`, and an empty store afterwards.
pub fn dig_all(library: &mut Library, _e: &Expression) -> Result<Outcome, LibraryError> {
    let mut terms = Vec::new();
    for (key, value) in library.store.dig_all() {
        terms.push(Term::OpenBracket);
        terms.extend(key.into_terms());
        terms.push(Term::Character('='));
        terms.extend(value.into_terms());
        terms.push(Term::CloseBracket);
    }
    Ok(Outcome::Value(Expression::from_balanced(terms)))
}
