//! PATH resolution check used to gate initialization on host prerequisites.

/// Check if a command is installed and resolvable on the current PATH.
///
/// Absence is a normal `false` result, never an error. The command is
/// not executed.
pub fn probe(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Probe with a diagnostic line for `--debug` runs.
pub fn probe_with_debug(command: &str, debug: bool) -> bool {
    let found = probe(command);
    if debug {
        let status = if found { "ok" } else { "not found" };
        println!("[debug] probe {}: {}", command, status);
    }
    found
}
