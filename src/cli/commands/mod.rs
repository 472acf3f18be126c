pub mod expense;
pub mod report;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command in the order `help` lists them.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    expense::definitions()
        .into_iter()
        .chain(report::definitions())
        .chain(system::definitions())
        .for_each(|entry| registry.register(entry));
}
