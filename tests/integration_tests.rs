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

extern crate num_bigint;
extern crate refal_runtime;
extern crate tempfile;

use std::fs;

use num_bigint::BigInt;
use refal_runtime::error::LibraryError;
use refal_runtime::primitives::Outcome;
use refal_runtime::read::{read_call, read_expression};
use refal_runtime::sink::SharedBuffer;
use refal_runtime::term::{Expression, Term};
use refal_runtime::Library;

fn new_library() -> (Library, SharedBuffer) {
    let out = SharedBuffer::new();
    (Library::new(Box::new(out.clone())), out)
}

fn execute(library: &mut Library, code: &str) -> Result<Outcome, LibraryError> {
    let call = read_call(code).unwrap();
    library.call(&call.name, &call.argument)
}

fn value(library: &mut Library, code: &str) -> Expression {
    match execute(library, code).unwrap() {
        Outcome::Value(v) => v,
        Outcome::NoResult => panic!("{} returned no value", code),
    }
}

fn expr(code: &str) -> Expression {
    read_expression(code).unwrap()
}

#[test]
fn it_adds_two() {
    let (mut library, _) = new_library();
    assert_eq!(expr("4"), value(&mut library, "<+ 2 2>"));
    assert_eq!(expr("4"), value(&mut library, "<Add 2 2>"));
}

#[test]
fn negative_results() {
    let (mut library, _) = new_library();
    assert_eq!(expr("'-' 1"), value(&mut library, "<Sub 2 3>"));
    assert_eq!(expr("'-' 6"), value(&mut library, "<Mul ('-' 2) 3>"));
    assert_eq!(expr("6"), value(&mut library, "<* ('-' 2) '-' 3>"));
    assert_eq!(expr("'-' 3"), value(&mut library, "<Div ('-' 7) 2>"));
}

#[test]
fn numb_reads_back_negative_results() {
    let (mut library, out) = new_library();
    let difference = value(&mut library, "<Sub 2 5>");
    assert_eq!(
        Outcome::Value(Expression::single(Term::Small(-3))),
        library.call("Numb", &difference).unwrap()
    );
    library.call("Prout", &difference).unwrap();
    assert_eq!("-3\n", out.contents());
}

#[test]
fn lone_minus_operand_is_zero() {
    let (mut library, _) = new_library();
    // t.1 is the lone '-', which converts to zero; e.2 is 7.
    assert_eq!(expr("7"), value(&mut library, "<Add '-' 7>"));
}

#[test]
fn big_arithmetic() {
    let (mut library, _) = new_library();
    let result = value(&mut library, "<Mul 9223372036854775807 10>");
    let expected: BigInt = "92233720368547758070".parse().unwrap();
    assert_eq!(Expression::single(Term::Big(expected)), result);

    let result = value(&mut library, "<Sub 4294967296 1>");
    assert_eq!(Expression::single(Term::Wide(4294967295)), result);
}

#[test]
fn arithmetic_needs_an_operand() {
    let (mut library, _) = new_library();
    match execute(&mut library, "<Add>") {
        Err(LibraryError::MatchFailure { .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn divide_by_zero() {
    let (mut library, _) = new_library();
    assert_eq!(
        Err(LibraryError::DivideByZero),
        execute(&mut library, "<Div 5 0>")
    );
    assert_eq!(
        Err(LibraryError::DivideByZero),
        execute(&mut library, "<Div 5 'abc'>")
    );
}

#[test]
fn print_and_prout() {
    let (mut library, out) = new_library();
    assert_eq!(expr("'hi' 3"), value(&mut library, "<Print 'hi' 3>"));
    assert_eq!(
        Outcome::NoResult,
        execute(&mut library, "<Prout 'bye'>").unwrap()
    );
    assert_eq!(
        Outcome::Value(Expression::new()),
        execute(&mut library, "<Print>").unwrap()
    );
    assert_eq!("hi3\nbye\n\n", out.contents());
}

#[test]
fn bury_then_dig() {
    let (mut library, _) = new_library();
    assert_eq!(Expression::new(), value(&mut library, "<Br 'K' '=' 'V'>"));
    assert_eq!(expr("'V'"), value(&mut library, "<Dg 'K'>"));
    assert_eq!(
        Err(LibraryError::KeyNotFound("K".into())),
        execute(&mut library, "<Dg 'K'>")
    );
    assert_eq!(
        Err(LibraryError::KeyNotFound("never".into())),
        execute(&mut library, "<Dig 'never'>")
    );
}

#[test]
fn bury_value_may_contain_equals() {
    let (mut library, _) = new_library();
    value(&mut library, "<Bury ('a=b') '=x=y'>");
    assert_eq!(expr("'x=y'"), value(&mut library, "<Dig ('a=b')>"));
}

#[test]
fn bury_without_equals() {
    let (mut library, _) = new_library();
    match execute(&mut library, "<Br 'KV'>") {
        Err(LibraryError::MatchFailure { builtin: "Br", .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(0, library.store().live_entries());
}

#[test]
fn dig_all_drains() {
    let (mut library, _) = new_library();
    value(&mut library, "<Br 'A' '=' 'X'>");
    value(&mut library, "<Br 'B' '=' 'Y'>");
    assert_eq!(
        expr("('A=X') ('B=Y')"),
        value(&mut library, "<Dgall>")
    );
    assert_eq!(0, library.store().live_entries());
    assert_eq!(Expression::new(), value(&mut library, "<DigAll>"));
    assert_eq!(
        Err(LibraryError::KeyNotFound("A".into())),
        execute(&mut library, "<Dg 'A'>")
    );
}

#[test]
fn type_classification() {
    let (mut library, _) = new_library();
    assert_eq!(expr("'Lu' 'A'"), value(&mut library, "<Type 'A'>"));
    assert_eq!(expr("'Ll' 'abc'"), value(&mut library, "<Type 'abc'>"));
    assert_eq!(expr("'D' 0 '5'"), value(&mut library, "<Type '5'>"));
    assert_eq!(expr("'N' 0 123"), value(&mut library, "<Type 123>"));
    assert_eq!(expr("'*' 0"), value(&mut library, "<Type>"));
    assert_eq!(expr("'B' 0 ('x')"), value(&mut library, "<Type ('x')>"));
    assert_eq!(expr("'Wi' foo"), value(&mut library, "<Type foo>"));
    assert_eq!(expr("'Wq' \"a b\""), value(&mut library, "<Type \"a b\">"));
    assert_eq!(expr("'Pl' '!'"), value(&mut library, "<Type '!'>"));
    assert_eq!(expr("'Ol' '\\t'"), value(&mut library, "<Type '\\t'>"));
}

#[test]
fn implode() {
    let (mut library, _) = new_library();
    assert_eq!(
        Expression::single(Term::Word("foo-bar".into())),
        value(&mut library, "<Implode ' foo-bar! '>")
    );
    assert_eq!(
        Expression::single(Term::Word("123".into())),
        value(&mut library, "<Implode '123 abc'>")
    );
    assert_eq!(
        Expression::single(Term::Word("".into())),
        value(&mut library, "<Implode '?'>")
    );
}

#[test]
fn numb() {
    let (mut library, _) = new_library();
    assert_eq!(expr("42"), value(&mut library, "<Numb '42'>"));
    assert_eq!(
        Expression::single(Term::Small(-17)),
        value(&mut library, "<Numb '-17'>")
    );
    assert_eq!(Expression::new(), value(&mut library, "<Numb>"));
    match execute(&mut library, "<Numb 'x1'>") {
        Err(LibraryError::ParseFailure { builtin: "Numb", .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn chr_and_ord() {
    let (mut library, _) = new_library();
    assert_eq!(expr("'Hi' x"), value(&mut library, "<Chr 72 105 x>"));
    assert_eq!(expr("'A'"), value(&mut library, "<Chr 321>"));
    assert_eq!(expr("72 105 (x)"), value(&mut library, "<Ord 'Hi' (x)>"));
}

#[test]
fn command_line_arguments() {
    let out = SharedBuffer::new();
    let mut library = Library::with_arguments(
        Box::new(out),
        vec!["first".to_string(), "second".to_string()],
    );
    assert_eq!(expr("'first'"), value(&mut library, "<Arg 1>"));
    assert_eq!(expr("'second'"), value(&mut library, "<Arg 2>"));
    assert_eq!(Expression::new(), value(&mut library, "<Arg 3>"));
    assert_eq!(Expression::new(), value(&mut library, "<Arg 0>"));
    assert_eq!(Expression::new(), value(&mut library, "<Arg>"));
}

#[test]
fn no_arguments_supplied() {
    let (mut library, _) = new_library();
    assert_eq!(Expression::new(), value(&mut library, "<Arg 1>"));
}

#[test]
fn unimplemented_builtins() {
    let (mut library, _) = new_library();
    for name in &[
        "Card",
        "Cp",
        "Rp",
        "Mu",
        "Implode-Ext",
        "Explode",
        "Symb",
        "Divmod",
        "First",
        "Putout",
    ] {
        assert_eq!(
            Err(LibraryError::NotImplemented(*name)),
            library.call(name, &Expression::new())
        );
        assert_eq!(
            Err(LibraryError::NotImplemented(*name)),
            library.call(name, &expr("'abc' 1 (2)"))
        );
    }
}

#[test]
fn unknown_builtin() {
    let (mut library, _) = new_library();
    assert_eq!(
        Err(LibraryError::UnknownBuiltin("Frobnicate".into())),
        library.call("Frobnicate", &Expression::new())
    );
    assert!(library.lookup("Prout").is_some());
    assert!(library.lookup("Frobnicate").is_none());
}

#[test]
fn write_then_read_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    let name = path.to_str().unwrap();
    let (mut library, out) = new_library();

    assert_eq!(
        Outcome::NoResult,
        execute(&mut library, &format!("<Open 'w' 1 '{}'>", name)).unwrap()
    );
    assert_eq!(expr("'hello'"), value(&mut library, "<Put 1 'hello'>"));
    assert_eq!(expr("'n=' 5"), value(&mut library, "<Put 1 'n=' 5>"));
    assert_eq!("hello\nn=5\n", fs::read_to_string(&path).unwrap());

    execute(&mut library, &format!("<Open 'R' 1 '{}'>", name)).unwrap();
    assert_eq!(expr("'hello'"), value(&mut library, "<Get 1>"));
    assert_eq!(expr("'n=5'"), value(&mut library, "<Get 1>"));
    assert_eq!(expr("0"), value(&mut library, "<Get 1>"));
    assert_eq!(expr("0"), value(&mut library, "<Get 1>"));

    library.close_files().unwrap();
    assert!(library.files().is_empty());
    assert_eq!("", out.contents());
}

#[test]
fn empty_line_is_not_end_of_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    fs::write(&path, "\r\nx\n").unwrap();
    let (mut library, _) = new_library();

    execute(
        &mut library,
        &format!("<Open 'r' in '{}'>", path.to_str().unwrap()),
    )
    .unwrap();
    assert_eq!(Expression::new(), value(&mut library, "<Get in>"));
    assert_eq!(expr("'x'"), value(&mut library, "<Get in>"));
    assert_eq!(expr("0"), value(&mut library, "<Get in>"));
}

#[test]
fn append_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    fs::write(&path, "one\n").unwrap();
    let name = path.to_str().unwrap();
    let (mut library, _) = new_library();

    execute(&mut library, &format!("<Open 'a' 2 '{}'>", name)).unwrap();
    value(&mut library, "<Put 2 'two'>");
    library.close_files().unwrap();
    assert_eq!("one\ntwo\n", fs::read_to_string(&path).unwrap());
}

#[test]
fn put_without_handle_prouts() {
    let (mut library, out) = new_library();
    assert_eq!(
        Outcome::NoResult,
        execute(&mut library, "<Put 7 'text'>").unwrap()
    );
    assert_eq!(Outcome::NoResult, execute(&mut library, "<Put>").unwrap());
    assert_eq!("7text\n\n", out.contents());
}

#[test]
fn get_without_handle_is_unsupported() {
    let (mut library, _) = new_library();
    assert_eq!(
        Err(LibraryError::NotImplemented("Card")),
        execute(&mut library, "<Get>")
    );
    assert_eq!(
        Err(LibraryError::NotImplemented("Card")),
        execute(&mut library, "<Get 3>")
    );
}

#[test]
fn get_on_write_handle_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("w.txt");
    let (mut library, _) = new_library();
    execute(
        &mut library,
        &format!("<Open 'w' 1 '{}'>", path.to_str().unwrap()),
    )
    .unwrap();
    assert_eq!(
        Err(LibraryError::NotImplemented("Card")),
        execute(&mut library, "<Get 1>")
    );
}

#[test]
fn open_errors() {
    let (mut library, _) = new_library();
    match execute(&mut library, "<Open>") {
        Err(LibraryError::MissingArgument { argument: "s.Mode", .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
    match execute(&mut library, "<Open 'r'>") {
        Err(LibraryError::MissingArgument { argument: "s.D", .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        Err(LibraryError::UnsupportedMode("X".into())),
        execute(&mut library, "<Open 'x' 1>")
    );

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    match execute(
        &mut library,
        &format!("<Open 'r' 1 '{}'>", missing.to_str().unwrap()),
    ) {
        Err(LibraryError::Io { .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn instances_are_isolated() {
    let (mut first, _) = new_library();
    let (mut second, _) = new_library();
    value(&mut first, "<Br 'k' '=' 'v'>");
    assert_eq!(
        Err(LibraryError::KeyNotFound("k".into())),
        execute(&mut second, "<Dg 'k'>")
    );
    assert_eq!(expr("'v'"), value(&mut first, "<Dg 'k'>"));
}
