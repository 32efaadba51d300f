//! Shell completion scripts for the `readmegen` binary.

use clap::Command;
use clap_complete::generate;
use std::io::Write;

pub use clap_complete::Shell;

/// Write the completion script for `shell` to `out`, named after `cmd`.
pub fn write_completions<W: Write>(cmd: &mut Command, shell: Shell, out: &mut W) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
