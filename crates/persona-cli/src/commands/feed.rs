//! Print the sample feed item.

use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("{}", persona_core::feed::fenced());
    Ok(())
}
