//! List command implementation

use crate::registry::Registry;

/// Run the list command
pub fn run(registry: &Registry) {
    for name in registry.names() {
        println!("{}", name);
    }
}
