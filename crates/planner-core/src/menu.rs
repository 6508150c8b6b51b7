//! Printable-menu composition.

use planner_model::{MenuData, MenuItem};

/// Item ids selected per category.
#[derive(Debug, Clone, Default)]
pub struct MenuSelection {
    pub sandwiches: Vec<String>,
    pub soups: Vec<String>,
    pub desserts: Vec<String>,
}

impl MenuSelection {
    pub fn is_empty(&self) -> bool {
        self.sandwiches.is_empty() && self.soups.is_empty() && self.desserts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// Allergen note for one item; soups also carry the vegetarian tag.
pub fn item_note(item: &MenuItem, is_soup: bool) -> String {
    let allergens = if item.allergens.is_empty() {
        "Allergens: none".to_string()
    } else {
        format!("Allergens: {}", item.allergens.join(", "))
    };
    if is_soup {
        let veg = if item.vegetarian {
            "Vegetarian"
        } else {
            "Not vegetarian"
        };
        format!("{allergens} • {veg}")
    } else {
        allergens
    }
}

fn by_ids<'a>(items: &'a [MenuItem], ids: &[String]) -> Vec<&'a MenuItem> {
    ids.iter()
        .filter_map(|id| items.iter().find(|item| item.id == *id))
        .collect()
}

/// Resolve the selection against the catalog and build the printable
/// sections. Fixed section order: Soup, Sandwiches, Dessert. Unknown ids
/// are skipped; empty sections are omitted.
pub fn compose(data: &MenuData, selection: &MenuSelection) -> Vec<MenuSection> {
    let mut sections = Vec::new();
    push_section(
        &mut sections,
        "Soup",
        &by_ids(&data.soups, &selection.soups),
        true,
    );
    push_section(
        &mut sections,
        "Sandwiches",
        &by_ids(&data.sandwiches, &selection.sandwiches),
        false,
    );
    push_section(
        &mut sections,
        "Dessert",
        &by_ids(&data.desserts, &selection.desserts),
        false,
    );
    sections
}

fn push_section(
    sections: &mut Vec<MenuSection>,
    title: &'static str,
    items: &[&MenuItem],
    is_soup: bool,
) {
    if items.is_empty() {
        return;
    }
    sections.push(MenuSection {
        title,
        entries: items
            .iter()
            .map(|item| MenuEntry {
                title: item.title.clone(),
                note: item_note(item, is_soup),
            })
            .collect(),
    });
}
