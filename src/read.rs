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

//! Reader system
//!
//! Turns literal expression text into expressions, for hosts that drive the library directly.
//!
//! `'abc'` is three characters, `"abc"` and `abc` are words, `42` is a number and `(` `)`
//! bracket a sub-expression. A call is written `<Name e.Arguments>`.

use std::iter::Peekable;

use num_bigint::BigInt;

use term::{Expression, Term};

#[derive(Debug, PartialEq, Clone)]
pub struct Call {
    pub name: String,
    pub argument: Expression,
}

/// Reads a whole line as one expression, or fails with an error message.
pub fn read_expression(input: &str) -> Result<Expression, String> {
    let mut it = input.chars().peekable();
    let mut terms: Vec<Term> = Vec::new();
    loop {
        consume_leading_spaces(&mut it);
        let c = match it.peek() {
            Some(&c) => c,
            None => break,
        };
        if c == '\'' {
            it.next();
            terms.extend(consume_quoted(&mut it, '\'')?.chars().map(Term::Character));
        } else if c == '"' {
            it.next();
            terms.push(Term::Word(consume_quoted(&mut it, '"')?));
        } else if c == '(' {
            it.next();
            terms.push(Term::OpenBracket);
        } else if c == ')' {
            it.next();
            terms.push(Term::CloseBracket);
        } else if c.is_ascii_digit() {
            let digits = take_while(&mut it, |c| c.is_ascii_digit());
            let n = digits
                .parse::<BigInt>()
                .map_err(|e| format!("Invalid number {}: {}", digits, e))?;
            terms.push(Term::number(&n));
        } else if c.is_alphabetic() {
            let word = take_while(&mut it, |c| c.is_alphanumeric() || c == '-' || c == '_');
            terms.push(Term::Word(word));
        } else {
            return Err(format!("Unexpected character {:?}", c));
        }
    }
    Expression::from_terms(terms).ok_or_else(|| "Unbalanced brackets".to_string())
}

/// Reads `<Name e.Arguments>`.
pub fn read_call(line: &str) -> Result<Call, String> {
    let trimmed = line.trim();
    if !trimmed.starts_with('<') || !trimmed.ends_with('>') || trimmed.len() < 2 {
        return Err(format!("Not a call: {}", trimmed));
    }
    let inner = trimmed[1..trimmed.len() - 1].trim_start();
    let name_end = inner
        .find(char::is_whitespace)
        .unwrap_or_else(|| inner.len());
    let name = &inner[..name_end];
    if name.is_empty() {
        return Err("Missing function name".into());
    }
    Ok(Call {
        name: name.to_string(),
        argument: read_expression(&inner[name_end..])?,
    })
}

fn consume_leading_spaces<I>(it: &mut Peekable<I>)
where
    I: Iterator<Item = char>,
{
    while let Some(&c) = it.peek() {
        if c.is_whitespace() {
            it.next();
        } else {
            break;
        }
    }
}

fn take_while<I, F>(it: &mut Peekable<I>, accept: F) -> String
where
    I: Iterator<Item = char>,
    F: Fn(char) -> bool,
{
    let mut result = String::new();
    while let Some(&c) = it.peek() {
        if accept(c) {
            result.push(c);
            it.next();
        } else {
            break;
        }
    }
    result
}

/// Reads up to the closing `quote`, which is consumed. The opening one must already be gone.
fn consume_quoted<I>(it: &mut Peekable<I>, quote: char) -> Result<String, String>
where
    I: Iterator<Item = char>,
{
    let mut result = String::new();
    loop {
        match it.next() {
            None => return Err(format!("Unterminated literal, expected {}", quote)),
            Some(c) if c == quote => return Ok(result),
            Some('\\') => {
                let escaped = match it.next() {
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some('r') => '\r',
                    Some('\\') => '\\',
                    Some('\'') => '\'',
                    Some('"') => '"',
                    Some(other) => return Err(format!("Invalid escape \\{}", other)),
                    None => return Err("Unterminated escape".into()),
                };
                result.push(escaped);
            }
            Some(c) => result.push(c),
        }
    }
}
