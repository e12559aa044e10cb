//! The `tablefilter` binary. All behavior lives in the library and the
//! [`cli`] module; this only maps errors to the exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
