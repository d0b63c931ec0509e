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

use std::error::Error;
use std::fmt;
use std::io;

/// Every way a built-in can fail. None of these are recovered inside the library.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    /// A required operand is absent.
    MissingArgument {
        builtin: &'static str,
        argument: &'static str,
    },
    /// `Open` got a mode that does not start with R, W or A.
    UnsupportedMode(String),
    /// The built-in exists in the language but has no implementation here.
    NotImplemented(&'static str),
    DivideByZero,
    ParseFailure { builtin: &'static str, text: String },
    /// `Dig` on a key that was never buried or was already dug up.
    KeyNotFound(String),
    /// The argument expression does not have the shape the built-in expects.
    MatchFailure {
        builtin: &'static str,
        shape: &'static str,
    },
    Io { context: String, message: String },
    UnknownBuiltin(String),
}

impl LibraryError {
    pub fn io(context: impl Into<String>, e: &io::Error) -> Self {
        LibraryError::Io {
            context: context.into(),
            message: e.to_string(),
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LibraryError::MissingArgument { builtin, argument } => {
                write!(f, "{}: missing argument {}", builtin, argument)
            }
            LibraryError::UnsupportedMode(mode) => write!(
                f,
                "Open: bad file open mode: {} (R, W, or A expected)",
                mode
            ),
            LibraryError::NotImplemented(name) => write!(f, "{}: not implemented", name),
            LibraryError::DivideByZero => write!(f, "Div: division by zero"),
            LibraryError::ParseFailure { builtin, text } => {
                write!(f, "{}: not a number: {:?}", builtin, text)
            }
            LibraryError::KeyNotFound(key) => write!(f, "Dig: nothing buried under {:?}", key),
            LibraryError::MatchFailure { builtin, shape } => {
                write!(f, "recognition impossible: <{} {}>", builtin, shape)
            }
            LibraryError::Io { context, message } => write!(f, "{}: {}", context, message),
            LibraryError::UnknownBuiltin(name) => write!(f, "unknown built-in: {}", name),
        }
    }
}

impl Error for LibraryError {}
