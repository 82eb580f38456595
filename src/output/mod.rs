//! Terminal output helpers

mod printer;

pub use printer::{print_info, print_success, print_warning};
