//! Flower SuperNode binary.

use std::process;

fn main() {
    if let Err(err) = supernode_node_commands::run_supernode() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}
