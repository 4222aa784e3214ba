//! Commands run by the SuperNode binaries.

pub mod client_app;
pub mod supernode;
