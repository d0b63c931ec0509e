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
use term::{Expression, Term};
use util::low_byte_char;
use Library;

fn case_subtype(c: char) -> Term {
    Term::Character(if c.is_uppercase() { 'u' } else { 'l' })
}

/// Category and subtype of the first term of an expression.
///
/// Categories: `*` empty, `B` bracket, `L` letter, `D` digit, `O` control character, `P` other
/// character, `N` number, `W` word. Letters, control and other characters carry `u` or `l` for
/// their case; words carry `i` (identifier-like) or `q` (needs quoting). Everything else is 0.
pub fn classify(terms: &[Term]) -> (char, Term) {
    let first = match terms.first() {
        None => return ('*', Term::Small(0)),
        Some(t) => t,
    };
    match first {
        Term::OpenBracket => ('B', Term::Small(0)),
        Term::Character(c) => {
            let c = *c;
            if c.is_ascii_alphabetic() {
                ('L', case_subtype(c))
            } else if c.is_ascii_digit() {
                ('D', Term::Small(0))
            } else if c.is_control() {
                ('O', case_subtype(c))
            } else {
                ('P', case_subtype(c))
            }
        }
        Term::Small(_) | Term::Wide(_) | Term::Big(_) => ('N', Term::Small(0)),
        Term::Word(w) => {
            let identifier =
                w.chars().next().map_or(false, |c| c.is_alphabetic()) && !w.contains(' ');
            ('W', Term::Character(if identifier { 'i' } else { 'q' }))
        }
        Term::CloseBracket => ('P', Term::Character('l')),
    }
}

/// `<Type e.Expr>` returns `s.Type s.Subtype e.Expr`.
pub fn type_(_library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let (category, subtype) = classify(e);
    let mut terms = Vec::with_capacity(e.len() + 2);
    terms.push(Term::Character(category));
    terms.push(subtype);
    terms.extend(e.iter().cloned());
    Ok(Outcome::Value(Expression::from_balanced(terms)))
}

/// Numbers become the character of their low byte; everything else is passed through.
pub fn chr(_library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let terms = e
        .iter()
        .map(|t| match t.try_get_integer() {
            Some(n) => Term::Character(low_byte_char(&n)),
            None => t.clone(),
        })
        .collect();
    Ok(Outcome::Value(Expression::from_balanced(terms)))
}

/// Characters become their code point; everything else is passed through.
pub fn ord(_library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let terms = e
        .iter()
        .map(|t| match t {
            Term::Character(c) => Term::Small(u32::from(*c) as i32),
            _ => t.clone(),
        })
        .collect();
    Ok(Outcome::Value(Expression::from_balanced(terms)))
}
