//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Synset;

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Synset {
    fn pretty_print(&self) -> String {
        let header = format!("Synset: {}", self.id().unwrap_or("(unknown id)"));
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];

        if let Some(ref synset_type) = self.synset_type {
            lines.push(format!("Type:           {}", synset_type));
        }

        let lemmas = self.lemmas();
        if !lemmas.is_empty() {
            lines.push(format!("Lemmas:         {}", lemmas.join(", ")));
        }

        for gloss in &self.glosses {
            lines.push(format!(
                "Gloss [{}]:     {}",
                gloss.language.as_deref().unwrap_or("??"),
                gloss.gloss
            ));
        }

        if let Some(example) = self.examples.first() {
            lines.push(format!("Example:        {}", example.example));
        }

        if !self.domains.is_empty() {
            let domains: Vec<String> = self
                .domains
                .iter()
                .map(|(name, score)| format!("{name} ({score:.2})"))
                .collect();
            lines.push(format!("Domains:        {}", domains.join(", ")));
        }

        if !self.categories.is_empty() {
            lines.push(format!("Categories:     {}", self.categories.len()));
        }

        lines.join("\n")
    }
}
