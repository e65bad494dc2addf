//! README rendering
//!
//! Rendering depends only on the registry and the [`RenderOptions`]. It never
//! looks at the clock or the environment, so rendering the same registry
//! twice gives byte-identical output.

use std::fmt::Write;

use super::Registry;

pub const DEFAULT_TITLE: &str = "Arc Boosts";
pub const DEFAULT_BUTTON_LABEL: &str = "I want this!";

const FOOTER: &str = "<!-- Generated by arc-boosts. Edit the registry, not this file. -->\n";

/// Labels used in the generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub button_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, registry: &Registry) -> String {
        let label = &self.options.button_label;
        let mut out = format!("# {}\n\n", self.options.title);

        for (section_index, (name, section)) in registry.sections().enumerate() {
            // Writing into a String cannot fail
            let _ = write!(
                out,
                "## {name}\n\n{}\n\n",
                section.description.as_deref().unwrap_or("")
            );

            if section.is_empty() {
                continue;
            }

            for (entry_index, (key, entry)) in section.entries.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "- **{key}** `v{}` [<kbd> <br> {label} <br> </kbd>][{}]",
                    entry.version,
                    reference_label(section_index, entry_index)
                );
            }
            out.push('\n');

            for (entry_index, entry) in section.entries.values().enumerate() {
                let _ = writeln!(
                    out,
                    "[{}]: {} '{label}'",
                    reference_label(section_index, entry_index),
                    entry.link
                );
            }
            out.push('\n');
        }

        out.push_str(FOOTER);
        out
    }
}

/// Render with the default title and button label
pub fn render(registry: &Registry) -> String {
    Renderer::default().render(registry)
}

/// Markdown reference label for an entry
///
/// Built from positions rather than names: Markdown matches labels
/// case-insensitively and keeps the first definition, so `Tools/Foo` and
/// `Tools/foo` (or `a/b` + `c` and `a` + `b/c`) would share one link.
fn reference_label(section_index: usize, entry_index: usize) -> String {
    format!("s{}-e{}", section_index + 1, entry_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Entry;
    use pretty_assertions::assert_eq;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        let tools = registry.section_or_insert("Tools", Some("Developer helpers".to_string()));
        tools
            .entries
            .insert("foo".to_string(), Entry::new("https://arc.net/boost/foo", "1.0.0"));
        tools
            .entries
            .insert("bar".to_string(), Entry::new("https://arc.net/boost/bar", "2.1.3"));
        registry
            .section_or_insert("Reading", None)
            .entries
            .insert("foo".to_string(), Entry::new("https://arc.net/boost/read", "1.0.4"));
        registry
    }

    #[test]
    fn test_empty_registry_renders_header_and_footer_only() {
        let rendered = render(&Registry::new());
        assert_eq!(rendered, format!("# Arc Boosts\n\n{FOOTER}"));
        assert!(!rendered.contains("## "));
    }

    #[test]
    fn test_render_layout() {
        let expected = "\
# Arc Boosts

## Tools

Developer helpers

- **foo** `v1.0.0` [<kbd> <br> I want this! <br> </kbd>][s1-e1]
- **bar** `v2.1.3` [<kbd> <br> I want this! <br> </kbd>][s1-e2]

[s1-e1]: https://arc.net/boost/foo 'I want this!'
[s1-e2]: https://arc.net/boost/bar 'I want this!'

## Reading



- **foo** `v1.0.4` [<kbd> <br> I want this! <br> </kbd>][s2-e1]

[s2-e1]: https://arc.net/boost/read 'I want this!'

<!-- Generated by arc-boosts. Edit the registry, not this file. -->
";
        assert_eq!(render(&sample_registry()), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let registry = sample_registry();
        assert_eq!(render(&registry), render(&registry));
        assert_eq!(render(&registry), render(&registry.clone()));
    }

    #[test]
    fn test_section_without_entries_has_heading_only() {
        let mut registry = Registry::new();
        registry.section_or_insert("Empty", Some("Nothing yet".to_string()));

        let rendered = render(&registry);
        assert!(rendered.contains("## Empty\n\nNothing yet\n\n<!--"));
    }

    #[test]
    fn test_custom_labels() {
        let renderer = Renderer::new(RenderOptions {
            title: "My Boosts".to_string(),
            button_label: "Get it".to_string(),
        });

        let rendered = renderer.render(&sample_registry());
        assert!(rendered.starts_with("# My Boosts\n\n"));
        assert!(rendered.contains("[<kbd> <br> Get it <br> </kbd>][s1-e1]"));
        assert!(rendered.contains("[s1-e1]: https://arc.net/boost/foo 'Get it'"));
    }

    #[test]
    fn test_reference_labels_never_collide() {
        let mut registry = Registry::new();
        let tools = registry.section_or_insert("Tools", None);
        tools
            .entries
            .insert("Foo".to_string(), Entry::new("https://arc.net/boost/upper", "1.0.0"));
        tools
            .entries
            .insert("foo".to_string(), Entry::new("https://arc.net/boost/lower", "1.0.0"));
        registry
            .section_or_insert("a/b", None)
            .entries
            .insert("c".to_string(), Entry::new("https://arc.net/boost/one", "1.0.0"));
        registry
            .section_or_insert("a", None)
            .entries
            .insert("b/c".to_string(), Entry::new("https://arc.net/boost/two", "1.0.0"));

        let rendered = render(&registry);

        // Markdown compares labels case-insensitively
        let mut labels: Vec<String> = rendered
            .lines()
            .filter(|line| line.starts_with('['))
            .filter_map(|line| line.split_once("]: "))
            .map(|(label, _)| label.trim_start_matches('[').to_lowercase())
            .collect();
        assert_eq!(labels.len(), 4);
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 4);

        assert!(rendered.contains("- **Foo** `v1.0.0` [<kbd> <br> I want this! <br> </kbd>][s1-e1]"));
        assert!(rendered.contains("[s1-e1]: https://arc.net/boost/upper"));
        assert!(rendered.contains("- **foo** `v1.0.0` [<kbd> <br> I want this! <br> </kbd>][s1-e2]"));
        assert!(rendered.contains("[s1-e2]: https://arc.net/boost/lower"));
        assert!(rendered.contains("- **c** `v1.0.0` [<kbd> <br> I want this! <br> </kbd>][s2-e1]"));
        assert!(rendered.contains("[s2-e1]: https://arc.net/boost/one"));
        assert!(rendered.contains("- **b/c** `v1.0.0` [<kbd> <br> I want this! <br> </kbd>][s3-e1]"));
        assert!(rendered.contains("[s3-e1]: https://arc.net/boost/two"));
    }
}
