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

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use error::LibraryError;
use pattern::{leading_term, Match};
use primitives::Outcome;
use term::{Expression, Term};
use util::parse_integer;
use Library;

/// Generates a two-operand arithmetic primitive, `<F t.1 e.2>`. The provided operator must be a
/// function (BigInt, BigInt) -> Result<BigInt, LibraryError>.
macro_rules! prim_binary {
    ($name:ident, $builtin:expr, $operator:ident) => {
        pub fn $name(_library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
            let (a, b) = integer_operands($builtin, e)?;
            let result = $operator(a, b)?;
            Ok(Outcome::Value(Expression::from_balanced(to_numeric_terms(
                &result,
            ))))
        }
    };
}

prim_binary!(add, "Add", add2);
fn add2(a: BigInt, b: BigInt) -> Result<BigInt, LibraryError> {
    Ok(a + b)
}

prim_binary!(sub, "Sub", sub2);
fn sub2(a: BigInt, b: BigInt) -> Result<BigInt, LibraryError> {
    Ok(a - b)
}

prim_binary!(mul, "Mul", mul2);
fn mul2(a: BigInt, b: BigInt) -> Result<BigInt, LibraryError> {
    Ok(a * b)
}

prim_binary!(div, "Div", div2);
/// Truncates toward zero.
fn div2(a: BigInt, b: BigInt) -> Result<BigInt, LibraryError> {
    if b.is_zero() {
        Err(LibraryError::DivideByZero)
    } else {
        Ok(a / b)
    }
}

/// Splits `t.1 e.2` and converts both halves to integers.
fn integer_operands(
    builtin: &'static str,
    e: &Expression,
) -> Result<(BigInt, BigInt), LibraryError> {
    let (first, rest) = match leading_term(e) {
        Match::Matched(p) => p,
        Match::NoMatch => {
            return Err(LibraryError::MatchFailure {
                builtin,
                shape: "t.1 e.2",
            })
        }
    };
    let a = match first {
        [single] => term_to_integer(builtin, single)?,
        group => to_signed_integer(builtin, group)?,
    };
    let b = to_signed_integer(builtin, rest)?;
    Ok((a, b))
}

/// The value of a lone symbol. No sign handling: a lone `-` is zero, like any other character.
pub fn term_to_integer(builtin: &'static str, t: &Term) -> Result<BigInt, LibraryError> {
    match t {
        Term::Word(w) => parse_integer(builtin, w),
        _ => Ok(t.try_get_integer().unwrap_or_else(BigInt::zero)),
    }
}

/// Finds the first number in an expression, brackets ignored. Every `-` character seen before it
/// flips the sign, adjacent or not. No number at all means zero.
pub fn to_signed_integer(builtin: &'static str, terms: &[Term]) -> Result<BigInt, LibraryError> {
    let mut negative = false;
    for t in terms {
        let magnitude = match t {
            Term::Character('-') => {
                negative = !negative;
                continue;
            }
            Term::Small(_) | Term::Wide(_) | Term::Big(_) | Term::Word(_) => {
                term_to_integer(builtin, t)?
            }
            _ => continue,
        };
        return Ok(if negative { -magnitude } else { magnitude });
    }
    Ok(BigInt::zero())
}

/// Negative numbers become a `-` character followed by the magnitude, which is stored in the
/// narrowest numeric term that holds it.
pub fn to_numeric_terms(n: &BigInt) -> Vec<Term> {
    if n.is_negative() {
        vec![Term::Character('-'), Term::number(&n.abs())]
    } else {
        vec![Term::number(n)]
    }
}
