//! Terminal output formatting.

use colored::Colorize;
use std::path::Path;

use persona_core::FormVariant;

/// Print variants as a table.
pub fn print_variants_table(variants: &[FormVariant]) {
    if variants.is_empty() {
        println!("{}", "No forms configured.".dimmed());
        return;
    }

    println!("{:<12} {:<6} {:<28} {}", "Slug", "Max", "Download", "Title");
    println!("{}", "─".repeat(80));

    for variant in variants {
        println!(
            "{:<12} {:<6} {:<28} {}",
            variant.slug.cyan(),
            variant.max_chars,
            variant.download_filename,
            truncate(&variant.title, 40)
        );
    }
}

/// Confirm a saved download.
pub fn print_saved(path: &Path, bytes: usize) {
    eprintln!(
        "{} Saved {} bytes to {}",
        "✓".green().bold(),
        bytes,
        path.display().to_string().cyan()
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
