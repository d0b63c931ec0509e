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
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, LineWriter, Write};
use std::path::Path;

use error::LibraryError;
use primitives::output::prout;
use primitives::Outcome;
use term::{Expression, Term};
use Library;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
    Append,
}

impl Mode {
    /// Only the first letter matters, in either case: `r`, `Read` and `RW` all open for reading.
    pub fn from_prefix(s: &str) -> Result<Mode, LibraryError> {
        let upper = s.to_uppercase();
        if upper.starts_with('R') {
            Ok(Mode::Read)
        } else if upper.starts_with('W') {
            Ok(Mode::Write)
        } else if upper.starts_with('A') {
            Ok(Mode::Append)
        } else {
            Err(LibraryError::UnsupportedMode(upper))
        }
    }
}

enum Port {
    Input(BufReader<File>),
    // Line buffered, so a file reopened for reading sees every line written so far.
    Output(LineWriter<File>),
}

impl fmt::Debug for Port {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Port::Input(_) => write!(f, "#<input-port>"),
            Port::Output(_) => write!(f, "#<output-port>"),
        }
    }
}

#[derive(Debug)]
struct OpenFile {
    mode: Mode,
    port: Port,
}

impl OpenFile {
    fn close(self) -> io::Result<()> {
        match self.port {
            Port::Input(_) => Ok(()),
            Port::Output(mut w) => w.flush(),
        }
    }
}

/// Open files of one running program, by handle.
///
/// Reopening a handle does not close what it pointed to: the old file is set aside and only
/// released by `close_all`.
#[derive(Debug, Default)]
pub struct FileTable {
    open: HashMap<String, OpenFile>,
    displaced: Vec<OpenFile>,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, handle: &str, mode: Mode, path: &Path) -> io::Result<()> {
        let port = match mode {
            Mode::Read => Port::Input(BufReader::new(File::open(path)?)),
            Mode::Write => Port::Output(LineWriter::new(File::create(path)?)),
            Mode::Append => Port::Output(LineWriter::new(
                OpenOptions::new().append(true).create(true).open(path)?,
            )),
        };
        debug!("opened {} as {} ({:?})", path.display(), handle, mode);
        if let Some(previous) = self.open.insert(handle.to_string(), OpenFile { mode, port }) {
            warn!(
                "handle {} reopened, previous {:?} file stays open until shutdown",
                handle, previous.mode
            );
            self.displaced.push(previous);
        }
        Ok(())
    }

    pub fn mode(&self, handle: &str) -> Option<Mode> {
        self.open.get(handle).map(|f| f.mode)
    }

    fn reader(&mut self, handle: &str) -> Option<&mut BufReader<File>> {
        match self.open.get_mut(handle) {
            Some(OpenFile {
                port: Port::Input(r),
                ..
            }) => Some(r),
            _ => None,
        }
    }

    fn writer(&mut self, handle: &str) -> Option<&mut LineWriter<File>> {
        match self.open.get_mut(handle) {
            Some(OpenFile {
                port: Port::Output(w),
                ..
            }) => Some(w),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Releases every file, registered or displaced. Every file is released even if flushing one
    /// fails; the first failure is reported.
    pub fn close_all(&mut self) -> Result<(), LibraryError> {
        let mut first_error = None;
        let registered = self.open.drain();
        let displaced = self
            .displaced
            .drain(..)
            .map(|f| ("(displaced)".to_string(), f));
        for (handle, file) in registered.chain(displaced) {
            debug!("closing {}", handle);
            if let Err(e) = file.close() {
                if first_error.is_none() {
                    first_error = Some(LibraryError::io(format!("closing {}", handle), &e));
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// A handle is named by the first argument term. Brackets never name one.
fn handle_of(e: &Expression) -> Option<String> {
    match e.first() {
        Some(t) if !t.is_bracket() => Some(t.to_string()),
        _ => None,
    }
}

/// `<Open s.Mode s.D e.File-name>`. The file name defaults to `refal<s.D>.dat`.
pub fn open(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    if e.is_empty() {
        return Err(LibraryError::MissingArgument {
            builtin: "Open",
            argument: "s.Mode",
        });
    } else if e.len() < 2 {
        return Err(LibraryError::MissingArgument {
            builtin: "Open",
            argument: "s.D",
        });
    }

    let mode = Mode::from_prefix(&e[0].to_string())?;
    let handle = e[1].to_string();
    let file_name = if e.len() > 2 {
        e.render_from(2)
    } else {
        format!("refal{}.dat", handle)
    };

    library
        .files
        .open(&handle, mode, Path::new(&file_name))
        .map_err(|err| LibraryError::io(format!("Open {}", file_name), &err))?;
    Ok(Outcome::NoResult)
}

/// `<Get s.D>`. Reads one line; end of file is the number 0. Reading from the terminal (no
/// handle, or one not open for reading) is not supported.
pub fn get(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let handle = match handle_of(e) {
        Some(h) => h,
        None => return Err(LibraryError::NotImplemented("Card")),
    };
    let reader = match library.files.reader(&handle) {
        Some(r) => r,
        None => return Err(LibraryError::NotImplemented("Card")),
    };

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|err| LibraryError::io(format!("Get {}", handle), &err))?;
    if read == 0 {
        return Ok(Outcome::Value(Expression::single(Term::Small(0))));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Outcome::Value(Expression::from_chars(&line)))
}

/// `<Put s.D e.Expr>`. Writes `e.Expr` as one line and returns it. Without a writable handle
/// this is `Prout` of the whole argument.
pub fn put(library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
    let handle = match handle_of(e) {
        Some(h) => h,
        None => return prout(library, e),
    };

    let written = match library.files.writer(&handle) {
        Some(w) => {
            writeln!(w, "{}", e.render_from(1))
                .map_err(|err| LibraryError::io(format!("Put {}", handle), &err))?;
            true
        }
        None => false,
    };
    if !written {
        return prout(library, e);
    }

    Ok(Outcome::Value(Expression::from_balanced(e[1..].to_vec())))
}
