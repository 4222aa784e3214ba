//! Retired `flower-client-app` binary.

fn main() {
    if let Err(err) = supernode_node_commands::run_client_app() {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
