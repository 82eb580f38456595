//! cirrus - command-line client for the Cirrus Cognitive Cloud services
//!
//! One invocation performs one remote operation: the argument vector is
//! parsed against the service registry, the matched handler makes a single
//! authenticated REST call, and the result is rendered to the terminal.

use cirrus_cli::dispatch;
use cirrus_cli::registry::Registry;

#[tokio::main]
async fn main() {
    let registry = match Registry::standard() {
        Ok(registry) => registry,
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    };

    let result = dispatch::run(&registry, std::env::args_os()).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}
