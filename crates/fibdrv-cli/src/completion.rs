//! Shell completion scripts.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `cmd` to `out`, keyed on the command's
/// own name.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin = cmd.get_name().to_string();
    generate(shell, cmd, bin, out);
}
