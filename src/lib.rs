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

#[macro_use]
extern crate log;
extern crate num_bigint;
extern crate num_traits;
#[cfg(test)]
extern crate tempfile;

use std::collections::HashMap;

use error::LibraryError;
use primitives::{BuryStore, FileTable, Outcome, Primitive};
use sink::Sink;
use term::Expression;

pub mod error;
pub mod pattern;
pub mod primitives;
pub mod read;
pub mod sink;
pub mod term;
pub mod util;

/// The standard library state of one running program: its output sink, open files, buried
/// expressions and command-line arguments.
///
/// Nothing here is shared between instances; two programs need two `Library` values.
pub struct Library {
    primitives: HashMap<&'static str, &'static Primitive>,
    sink: Box<dyn Sink>,
    files: FileTable,
    store: BuryStore,
    arguments: Vec<String>,
}

impl Library {
    pub fn new(sink: Box<dyn Sink>) -> Self {
        Library::with_arguments(sink, Vec::new())
    }

    pub fn with_arguments(sink: Box<dyn Sink>, arguments: Vec<String>) -> Self {
        Library {
            primitives: primitives::register_primitives(),
            sink,
            files: FileTable::new(),
            store: BuryStore::new(),
            arguments,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&'static Primitive> {
        self.primitives.get(name).cloned()
    }

    /// Runs the built-in `name` on an already-matched argument.
    pub fn call(&mut self, name: &str, argument: &Expression) -> Result<Outcome, LibraryError> {
        let primitive = self
            .lookup(name)
            .ok_or_else(|| LibraryError::UnknownBuiltin(name.to_string()))?;
        trace!("<{} {}>", name, argument);
        primitive.apply(self, argument)
    }

    /// Releases every open file. Meant to be called once, when the program ends.
    pub fn close_files(&mut self) -> Result<(), LibraryError> {
        self.files.close_all()
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn store(&self) -> &BuryStore {
        &self.store
    }

    fn write_line(&mut self, text: &str) -> Result<(), LibraryError> {
        self.sink
            .write(&format!("{}\n", text))
            .map_err(|e| LibraryError::io("output", &e))
    }
}
