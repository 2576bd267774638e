//! List the available forms.

use anyhow::{Context, Result};

use persona_core::form::Registry;

use crate::output;

pub fn execute() -> Result<()> {
    let registry = Registry::builtin().context("Failed to load form variants")?;
    output::print_variants_table(registry.variants());
    Ok(())
}
