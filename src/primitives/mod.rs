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

//! Built-in functions, looked up by name when a program calls a function it does not define.
//!
//! Naming conventions in Rust: Refal names are kept where they are valid identifiers, symbolic
//! names get spelled out (`+` is `add`), and `Type` becomes `type_`.
//!
//! ### Status
//! OK Print Prout
//! OK Open Get Put
//! OK Br Dg Dgall (also Bury Dig DigAll)
//! OK + - * / (also Add Sub Mul Div)
//! OK Type Implode Numb Chr Ord Arg
//!
//! Card Cp Rp Mu Implode-Ext Explode Symb Divmod First Putout

use std::collections::HashMap;
use std::fmt::{Debug, Error, Formatter};

use error::LibraryError;
use primitives::args::*;
use primitives::char::*;
use primitives::numeric::*;
use primitives::output::*;
use primitives::port::*;
use primitives::store::*;
use primitives::symbol::*;
use term::Expression;
use Library;

pub use primitives::numeric::{to_numeric_terms, to_signed_integer};
pub use primitives::port::{FileTable, Mode};
pub use primitives::store::BuryStore;

mod args;
mod char;
mod numeric;
mod output;
mod port;
mod store;
mod symbol;

/// What a built-in hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Expression),
    /// The call had an effect but no value. Not the same as an empty expression.
    NoResult,
}

macro_rules! simple_primitive {
    ($name:expr, $implementation:ident) => {
        Primitive {
            name: $name,
            implementation: PrimitiveImplementation::Simple($implementation),
        }
    };
}

macro_rules! unimplemented_primitive {
    ($name:expr) => {
        Primitive {
            name: $name,
            implementation: PrimitiveImplementation::Unimplemented,
        }
    };
}

static PRIMITIVES: [Primitive; 35] = [
    simple_primitive!("Print", print),
    simple_primitive!("Prout", prout),
    simple_primitive!("Open", open),
    simple_primitive!("Get", get),
    simple_primitive!("Put", put),
    simple_primitive!("Arg", arg),
    simple_primitive!("Br", bury),
    simple_primitive!("Bury", bury),
    simple_primitive!("Dg", dig),
    simple_primitive!("Dig", dig),
    simple_primitive!("Dgall", dig_all),
    simple_primitive!("DigAll", dig_all),
    simple_primitive!("+", add),
    simple_primitive!("Add", add),
    simple_primitive!("-", sub),
    simple_primitive!("Sub", sub),
    simple_primitive!("*", mul),
    simple_primitive!("Mul", mul),
    simple_primitive!("/", div),
    simple_primitive!("Div", div),
    simple_primitive!("Type", type_),
    simple_primitive!("Implode", implode),
    simple_primitive!("Numb", numb),
    simple_primitive!("Chr", chr),
    simple_primitive!("Ord", ord),
    unimplemented_primitive!("Card"),
    unimplemented_primitive!("Cp"),
    unimplemented_primitive!("Rp"),
    unimplemented_primitive!("Mu"),
    unimplemented_primitive!("Implode-Ext"),
    unimplemented_primitive!("Explode"),
    unimplemented_primitive!("Symb"),
    unimplemented_primitive!("Divmod"),
    unimplemented_primitive!("First"),
    unimplemented_primitive!("Putout"),
];

pub type SimplePrimitive = fn(&mut Library, &Expression) -> Result<Outcome, LibraryError>;

pub struct Primitive {
    pub name: &'static str,
    pub implementation: PrimitiveImplementation,
}

pub enum PrimitiveImplementation {
    Simple(SimplePrimitive),
    /// Part of the language, deliberately absent here. Always fails with `NotImplemented`.
    Unimplemented,
}

impl Primitive {
    pub fn apply(&self, library: &mut Library, e: &Expression) -> Result<Outcome, LibraryError> {
        match self.implementation {
            PrimitiveImplementation::Simple(f) => f(library, e),
            PrimitiveImplementation::Unimplemented => Err(LibraryError::NotImplemented(self.name)),
        }
    }
}

impl Debug for Primitive {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "primitive {}", self.name)
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Primitive) -> bool {
        self.name == other.name
    }
}

/// Builds the name -> primitive table. Done once per `Library`.
pub fn register_primitives() -> HashMap<&'static str, &'static Primitive> {
    PRIMITIVES.iter().map(|prim| (prim.name, prim)).collect()
}
