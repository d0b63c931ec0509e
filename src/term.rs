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

//! Terms and expressions
//!
//! An expression is a flat sequence of terms. Nesting is encoded with balanced bracket terms:
//! `(` `a` `)` is one nested sub-expression containing the character `a`.

use std::fmt;
use std::ops::Deref;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Character(char),
    Small(i32),
    Wide(i64),
    Big(BigInt),
    Word(String),
    OpenBracket,
    CloseBracket,
}

impl Term {
    /// Builds the narrowest numeric term holding `n` exactly.
    pub fn number(n: &BigInt) -> Term {
        if let Some(i) = n.to_i32() {
            Term::Small(i)
        } else if let Some(l) = n.to_i64() {
            Term::Wide(l)
        } else {
            Term::Big(n.clone())
        }
    }

    pub fn try_get_integer(&self) -> Option<BigInt> {
        match self {
            Term::Small(i) => Some(BigInt::from(*i)),
            Term::Wide(l) => Some(BigInt::from(*l)),
            Term::Big(b) => Some(b.clone()),
            _ => None,
        }
    }

    pub fn is_bracket(&self) -> bool {
        match self {
            Term::OpenBracket | Term::CloseBracket => true,
            _ => false,
        }
    }

    /// Numbers and words need a space between each other. Everything else is glued to its
    /// neighbours, so `'-' 3` reads back as `-3`.
    fn is_spaced(&self) -> bool {
        match self {
            Term::Small(_) | Term::Wide(_) | Term::Big(_) | Term::Word(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Character(c) => write!(f, "{}", c),
            Term::Small(i) => write!(f, "{}", i),
            Term::Wide(l) => write!(f, "{}", l),
            Term::Big(b) => write!(f, "{}", b),
            Term::Word(w) => write!(f, "{}", w),
            Term::OpenBracket => write!(f, "("),
            Term::CloseBracket => write!(f, ")"),
        }
    }
}

/// An immutable sequence of terms with balanced brackets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    pub fn new() -> Self {
        Expression { terms: Vec::new() }
    }

    /// Builds an expression out of a term vector. Returns `None` if the brackets are not
    /// balanced.
    pub fn from_terms(terms: Vec<Term>) -> Option<Self> {
        if brackets_balanced(&terms) {
            Some(Expression { terms })
        } else {
            None
        }
    }

    /// Wraps terms the caller has assembled from balanced pieces.
    pub(crate) fn from_balanced(terms: Vec<Term>) -> Self {
        debug_assert!(brackets_balanced(&terms), "unbalanced brackets");
        Expression { terms }
    }

    pub fn from_chars(s: &str) -> Self {
        Expression {
            terms: s.chars().map(Term::Character).collect(),
        }
    }

    pub fn single(t: Term) -> Self {
        debug_assert!(!t.is_bracket(), "lone bracket term");
        Expression { terms: vec![t] }
    }

    /// Wraps the expression in a bracket pair.
    pub fn bracketed(&self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + 2);
        terms.push(Term::OpenBracket);
        terms.extend(self.terms.iter().cloned());
        terms.push(Term::CloseBracket);
        Expression { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Renders the terms starting at `start`. Out-of-range offsets render as the empty string.
    pub fn render_from(&self, start: usize) -> String {
        render(self.terms.get(start..).unwrap_or(&[]))
    }
}

impl Deref for Expression {
    type Target = [Term];

    fn deref(&self) -> &[Term] {
        &self.terms
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(&self.terms))
    }
}

pub fn render(terms: &[Term]) -> String {
    let mut output = String::new();
    let mut after_spaced = false;
    for t in terms {
        match t {
            Term::CloseBracket => {
                output.push(')');
                after_spaced = false;
            }
            Term::OpenBracket => {
                output.push('(');
                after_spaced = false;
            }
            _ => {
                let spaced = t.is_spaced();
                if spaced && after_spaced {
                    output.push(' ');
                }
                output.push_str(&t.to_string());
                after_spaced = spaced;
            }
        }
    }
    output
}

fn brackets_balanced(terms: &[Term]) -> bool {
    let mut depth: usize = 0;
    for t in terms {
        match t {
            Term::OpenBracket => depth += 1,
            Term::CloseBracket => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => (),
        }
    }
    depth == 0
}

/// Returns the index one past the bracket that closes the bracket at `start`, or `start + 1` if
/// `terms[start]` is not an opening bracket.
pub fn term_end(terms: &[Term], start: usize) -> usize {
    if terms[start] != Term::OpenBracket {
        return start + 1;
    }
    let mut depth: usize = 0;
    for (i, t) in terms.iter().enumerate().skip(start) {
        match t {
            Term::OpenBracket => depth += 1,
            Term::CloseBracket => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => (),
        }
    }
    terms.len()
}
