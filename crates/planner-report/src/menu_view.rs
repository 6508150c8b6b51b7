//! Printable menu rendering.

use planner_core::MenuSection;

/// Plain-text printable menu: title, meta line, then the sections.
pub fn printable_menu(title: &str, meta: &str, sections: &[MenuSection]) -> String {
    let title = title.trim();
    let mut lines = vec![if title.is_empty() { "Menu" } else { title }.to_string()];
    let meta = meta.trim();
    if !meta.is_empty() {
        lines.push(meta.to_string());
    }
    lines.push(String::new());

    if sections.is_empty() {
        lines.push("No items selected.".to_string());
        return lines.join("\n");
    }

    for section in sections {
        lines.push(section.title.to_string());
        for entry in &section.entries {
            lines.push(format!("  {}", entry.title));
            lines.push(format!("    {}", entry.note));
        }
        lines.push(String::new());
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
