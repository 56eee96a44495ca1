use std::io::{BufRead, Write};

use wayfinder_core::config::WayfinderConfig;
use wayfinder_output::OutputFormatter;

use super::run::emit;
use crate::session::Session;

const PROMPT: &str = "wayfinder> ";

/// Run `wayfinder repl`: read commands from stdin until EOF or `quit`.
///
/// Errors are reported and the session continues; the graph is never left
/// half-updated by a rejected command.
pub fn run(formatter: Box<dyn OutputFormatter>, config: &WayfinderConfig) -> i32 {
    let mut session = Session::new(config, formatter);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{PROMPT}");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("wayfinder repl: failed to read input: {}", e);
                return 2;
            }
        }

        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        match session.execute_line(&line) {
            Ok(Some(out)) => emit(&out),
            Ok(None) => {}
            Err(e) => eprintln!("error: {}", e),
        }
    }
    0
}
