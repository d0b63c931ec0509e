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

//! The two argument shapes the library recognizes on its own. General pattern matching belongs
//! to the host; built-ins only need to split their already-bound argument.

use term::{term_end, Term};

#[derive(Debug, PartialEq)]
pub enum Match<T> {
    Matched(T),
    NoMatch,
}

/// `t.1 e.2`: one term (a symbol, or a bracketed group including its brackets), then the rest.
pub fn leading_term(terms: &[Term]) -> Match<(&[Term], &[Term])> {
    if terms.is_empty() || terms[0] == Term::CloseBracket {
        return Match::NoMatch;
    }
    let end = term_end(terms, 0);
    Match::Matched(terms.split_at(end))
}

/// `e.1 s.Sep e.2` where `e.1` is the shortest prefix, so it holds no `sep` at the top level.
/// The separator itself is dropped.
pub fn split_at_symbol<'a>(terms: &'a [Term], sep: &Term) -> Match<(&'a [Term], &'a [Term])> {
    let mut depth: usize = 0;
    for (i, t) in terms.iter().enumerate() {
        match t {
            Term::OpenBracket => depth += 1,
            Term::CloseBracket => depth = depth.saturating_sub(1),
            _ if depth == 0 && t == sep => {
                return Match::Matched((&terms[..i], &terms[i + 1..]));
            }
            _ => (),
        }
    }
    Match::NoMatch
}
