use std::{fs, io};

use clap::Parser;
use parva::interpreter::evaluator::core::Context;

/// parva is a minimal, dynamically-typed scripting language with numbers,
/// text, and `if`/`while` control flow.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells parva to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the script's final statement after it finishes.
    #[arg(short, long)]
    print_result: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut stdout = io::stdout();
    let mut context = Context::new(&mut stdout);

    match parva::interpret(&script, &mut context) {
        Ok(result) => {
            if args.print_result
               && let Some(value) = result
            {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
