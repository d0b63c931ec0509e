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
use num_traits::ToPrimitive;

use error::LibraryError;

/// Parses a base-10 integer literal, tolerating surrounding whitespace and a leading sign.
pub fn parse_integer(builtin: &'static str, s: &str) -> Result<BigInt, LibraryError> {
    let trimmed = s.trim();
    let digits = trimmed.trim_start_matches(|c: char| c == '-' || c == '+');
    // BigInt accepts `_` separators, which are not part of the literal syntax.
    let one_sign = digits.len() + 1 >= trimmed.len();
    if digits.is_empty() || !one_sign || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LibraryError::ParseFailure {
            builtin,
            text: s.to_string(),
        });
    }
    trimmed
        .parse::<BigInt>()
        .map_err(|_| LibraryError::ParseFailure {
            builtin,
            text: s.to_string(),
        })
}

/// Keeps the low byte of `n`, two's complement style, and reads it as a Latin-1 code point.
pub fn low_byte_char(n: &BigInt) -> char {
    let modulus = BigInt::from(256);
    let byte = ((n % &modulus) + &modulus) % &modulus;
    char::from(byte.to_u8().unwrap_or(0))
}
