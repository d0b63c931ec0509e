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

extern crate clap;
#[macro_use]
extern crate log;
extern crate pretty_env_logger;
extern crate refal_runtime;

use std::env;
use std::fs;
use std::io::{self, Read};

use clap::{App, Arg};
use refal_runtime::primitives::Outcome;
use refal_runtime::read::read_call;
use refal_runtime::sink::StdoutSink;
use refal_runtime::Library;

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = env::args().collect();
    match do_main(args) {
        Err(e) => {
            println!("error: {}", e);
            std::process::exit(1)
        }
        Ok(()) => std::process::exit(0),
    }
}

fn do_main(args: Vec<String>) -> Result<(), String> {
    let options = parse_args(&args.iter().map(|x| &**x).collect::<Vec<_>>())
        .map_err(|e| format!("could not parse arguments: {}", e))?;

    let script = match options.script {
        Some(ref path) if path != "-" => {
            fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| e.to_string())?;
            buf
        }
    };

    let mut library = Library::with_arguments(Box::new(StdoutSink), options.program_args);
    let failures = run_script(&mut library, &script, options.quiet);
    library.close_files().map_err(|e| e.to_string())?;

    if failures > 0 {
        Err(format!("{} call(s) failed", failures))
    } else {
        Ok(())
    }
}

/// Runs every call line of `script`, returning how many failed.
fn run_script(library: &mut Library, script: &str, quiet: bool) -> usize {
    let mut failures = 0;
    for (i, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('*') {
            continue;
        }
        let result = read_call(line)
            .map_err(|e| format!("line {}: {}", i + 1, e))
            .and_then(|call| {
                debug!("line {}: calling {}", i + 1, call.name);
                library
                    .call(&call.name, &call.argument)
                    .map_err(|e| format!("line {}: {}", i + 1, e))
            });
        match result {
            Ok(Outcome::Value(v)) => {
                if !quiet {
                    println!(" => {}", v)
                }
            }
            Ok(Outcome::NoResult) => (),
            Err(e) => {
                println!("error: {}", e);
                failures += 1;
            }
        }
    }
    failures
}

#[derive(Debug)]
struct Options {
    pub script: Option<String>,
    pub quiet: bool,
    pub program_args: Vec<String>,
}

fn parse_args(args: &[&str]) -> Result<Options, String> {
    let matches = App::new("refal-rt")
        .version("0.1")
        .author("Matthieu Felix <matthieufelix@gmail.com>")
        .about("Runs Refal standard library calls, one <Name args> per line")
        .arg(
            Arg::with_name("quiet")
                .long("quiet")
                .short("q")
                .help("Do not print returned values"),
        )
        .arg(Arg::with_name("script").help("File of calls to run, - for stdin"))
        .arg(
            Arg::with_name("program-args")
                .multiple(true)
                .last(true)
                .help("Arguments seen by <Arg s.N>"),
        )
        .get_matches_from(args);

    Ok(Options {
        script: matches.value_of("script").map(|v| v.to_string()),
        quiet: matches.is_present("quiet"),
        program_args: matches
            .values_of("program-args")
            .map(|vs| vs.map(|v| v.to_string()).collect())
            .unwrap_or_else(Vec::new),
    })
}
