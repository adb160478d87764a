//! CLI definitions and argument-shape dispatch.

use anyhow::Result;
use clap::Parser;

use crate::editor::HostsFile;
use crate::platform;

/// Printed for any argument shape the dispatch does not recognize.
/// Usage errors go to stdout and exit 0.
const USAGE: &str = "Invalid arguments

Usage:

    hosts [address] [host]
    hosts clear [host]";

#[derive(Parser)]
#[command(name = "hosts")]
#[command(about = "Edit the system hosts file: list, upsert, clear")]
pub struct Cli {
    /// IP address to map, or the literal `clear`
    pub address: Option<String>,

    /// Hostname
    pub host: Option<String>,

    #[arg(num_args = 0.., hide = true)]
    pub extra: Vec<String>,
}

/// Run CLI and dispatch on argument shape.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = platform::hosts_file_path()?;
    let file = HostsFile::load(path)?;

    match (cli.address.as_deref(), cli.host.as_deref(), cli.extra.is_empty()) {
        (Some("clear"), Some(host), true) => cmd_clear(&file, host),
        (Some(address), Some(host), true) => cmd_upsert(&file, address, host),
        (None, None, true) => cmd_list(&file),
        _ => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

/// Print every valid entry as `<address> <name>`, in file order.
fn cmd_list(file: &HostsFile) -> Result<()> {
    for entry in file.entries()? {
        println!("{} {}", entry.address, entry.name);
    }
    Ok(())
}

fn cmd_upsert(file: &HostsFile, address: &str, host: &str) -> Result<()> {
    file.upsert(address, host)
}

fn cmd_clear(file: &HostsFile, host: &str) -> Result<()> {
    file.clear(host)
}
