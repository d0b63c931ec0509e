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

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Where `Print` and `Prout` send their text. Callers supply their own newlines.
pub trait Sink {
    fn write(&mut self, text: &str) -> io::Result<()>;
}

pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()
    }
}

/// In-memory sink. Clones share the same buffer, so a caller can keep one clone and hand the
/// other to a `Library`.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    contents: Rc<RefCell<String>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }
}

impl Sink for SharedBuffer {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.contents.borrow_mut().push_str(text);
        Ok(())
    }
}
