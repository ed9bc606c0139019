// Copyright (C) 2023  Alex Crawford
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use ignore_result::Ignore;
use lineinterp::Interpreter;
use std::io::Write;
use std::path::PathBuf;

/// Line-oriented integer calculator.
///
/// Runs SCRIPT, if given, then reads statements from stdin until end of input.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File of statements to run before the interactive session.
    script: Option<PathBuf>,
}

/// Logs to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let mut interpreter = Interpreter::default();

    if let Some(script) = &args.script {
        if let Err(err) = interpreter.run_file(script, &mut std::io::stdout()) {
            eprintln!(":: {err}");
            std::process::exit(1);
        }
        interpreter.reset();
    }

    println!("type code for interpreter; type EOF to stop\n");

    let mut lines = std::io::stdin().lines();
    let prompted = std::iter::from_fn(|| {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"> ").ignore();
        stdout.flush().ignore();
        lines.next()
    });

    if let Err(err) = interpreter.run(prompted, &mut std::io::stdout()) {
        eprintln!(":: {err}");
        std::process::exit(1);
    }
}
