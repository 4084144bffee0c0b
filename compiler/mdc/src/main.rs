//! `mdc` - markdown lexer inspector CLI.

use mdc::USAGE;

fn main() {
    mdc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match mdc::run(args.as_slice()) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage_error() {
                eprintln!();
                eprint!("{USAGE}");
            }
            std::process::exit(1);
        }
    }
}
