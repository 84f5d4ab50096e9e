//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = clubmatch_cli::run() {
        eprintln!("clubmatch: {err}");
        std::process::exit(1);
    }
}
