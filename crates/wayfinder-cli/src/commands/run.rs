use std::io::Read;

use wayfinder_core::config::WayfinderConfig;
use wayfinder_core::store::GraphStore;
use wayfinder_output::OutputFormatter;

use crate::session::Session;

/// Run `wayfinder run <script>`: execute a session script line by line.
///
/// Failing lines are reported and skipped unless `strict` is set.
pub fn run(
    formatter: Box<dyn OutputFormatter>,
    config: &WayfinderConfig,
    verbose: bool,
    script: String,
    strict: bool,
) -> i32 {
    let source = match read_script(&script) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("wayfinder run: failed to read {}: {}", script, e);
            return 2;
        }
    };

    let mut session = Session::new(config, formatter);
    let mut failures = 0usize;

    for (idx, line) in source.lines().enumerate() {
        match session.execute_line(line) {
            Ok(Some(out)) => emit(&out),
            Ok(None) => {}
            Err(e) => {
                failures += 1;
                eprintln!("error: line {}: {}", idx + 1, e);
                if strict {
                    break;
                }
            }
        }
    }

    if verbose {
        eprintln!(
            "wayfinder run: {} vertex(es), {} edge(s), {} failed line(s)",
            session.graph().vertex_count(),
            session.graph().edge_count(),
            failures
        );
    }

    if failures > 0 {
        1
    } else {
        0
    }
}

fn read_script(script: &str) -> std::io::Result<String> {
    if script == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(script)
    }
}

/// Print formatter output, adding the trailing newline JSON output lacks.
pub(crate) fn emit(out: &str) {
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}
