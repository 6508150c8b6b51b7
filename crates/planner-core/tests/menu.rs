use planner_core::menu::{MenuSelection, compose, item_note};
use planner_model::{MenuData, MenuItem};

fn item(id: &str, title: &str, allergens: &[&str], vegetarian: bool) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        title: title.to_string(),
        allergens: allergens.iter().map(|a| a.to_string()).collect(),
        vegetarian,
    }
}

fn data() -> MenuData {
    MenuData {
        sandwiches: vec![
            item("s1", "Club Sandwich", &["gluten", "egg"], false),
            item("s2", "Caprese Ciabatta", &["gluten", "milk"], false),
        ],
        soups: vec![
            item("p1", "Tomato Basil", &[], true),
            item("p2", "Seafood Chowder", &["fish", "milk"], false),
        ],
        desserts: vec![item("d1", "Lemon Tart", &["gluten", "egg"], false)],
    }
}

#[test]
fn sections_come_in_fixed_order_and_skip_empties() {
    let selection = MenuSelection {
        sandwiches: vec!["s2".to_string()],
        soups: vec!["p1".to_string()],
        desserts: Vec::new(),
    };
    let sections = compose(&data(), &selection);
    let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Soup", "Sandwiches"]);
    assert_eq!(sections[0].entries[0].title, "Tomato Basil");
}

#[test]
fn unknown_ids_are_skipped() {
    let selection = MenuSelection {
        desserts: vec!["d1".to_string(), "nope".to_string()],
        ..MenuSelection::default()
    };
    let sections = compose(&data(), &selection);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].entries.len(), 1);
}

#[test]
fn notes_list_allergens_and_soup_vegetarian_tag() {
    let soup = item("p1", "Tomato Basil", &[], true);
    assert_eq!(item_note(&soup, true), "Allergens: none • Vegetarian");

    let chowder = item("p2", "Seafood Chowder", &["fish", "milk"], false);
    assert_eq!(
        item_note(&chowder, true),
        "Allergens: fish, milk • Not vegetarian"
    );

    let sandwich = item("s1", "Club Sandwich", &["gluten", "egg"], false);
    assert_eq!(item_note(&sandwich, false), "Allergens: gluten, egg");
}

#[test]
fn empty_selection_composes_nothing() {
    assert!(compose(&data(), &MenuSelection::default()).is_empty());
    assert!(MenuSelection::default().is_empty());
}
