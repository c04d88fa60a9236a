use std::{fs, process};

use clap::Parser;
use num_traits::ToPrimitive;
use plc::{check, compile_to_java, execute, interpreter::value::core::Value};

/// plc checks and runs programs written in a small imperative language, or
/// translates them to Java.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plc to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the program as Java source instead of running it.
    #[arg(short, long)]
    emit_java: bool,

    /// Stops after static analysis and reports whether the program is valid.
    #[arg(short, long, conflicts_with = "emit_java")]
    check: bool,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if args.check {
        if let Err(e) = check(&script) {
            eprintln!("{e}");
            process::exit(1);
        }
        return;
    }

    if args.emit_java {
        match compile_to_java(&script) {
            Ok(java) => print!("{java}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
        return;
    }

    match execute(&script) {
        Ok(Value::Integer(code)) => process::exit(code.to_i32().unwrap_or(1)),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
