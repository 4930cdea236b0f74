//! View Renderer
//!
//! Rendered page state: list rows, form fields, edit mode, list visibility
//! and the total. Components draw this state; the controller mutates it
//! through the operations below.

use crate::config::Selectors;
use crate::models::{Item, ItemInput};

/// Class of the edit affordance inside each row
pub const EDIT_ITEM_CLASS: &str = "edit-item";

const ITEM_ID_PREFIX: &str = "item-";

/// Element ID of the row rendering item `id`
pub fn item_element_id(id: u32) -> String {
    format!("{}{}", ITEM_ID_PREFIX, id)
}

/// Recover the item ID from a row element ID (`item-<id>`)
pub fn parse_item_element_id(element_id: &str) -> Option<u32> {
    element_id.strip_prefix(ITEM_ID_PREFIX)?.parse().ok()
}

/// One rendered list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: u32,
    pub element_id: String,
    pub name: String,
    pub calories: i64,
}

impl From<&Item> for ListRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            element_id: item_element_id(item.id),
            name: item.name.clone(),
            calories: item.calories,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    selectors: Selectors,
    rows: Vec<ListRow>,
    form: ItemInput,
    edit_mode: bool,
    list_visible: bool,
    total_calories: i64,
}

impl Renderer {
    pub fn new(selectors: Selectors) -> Self {
        Self {
            selectors,
            rows: Vec::new(),
            form: ItemInput::default(),
            edit_mode: false,
            list_visible: true,
            total_calories: 0,
        }
    }

    // ========================
    // List
    // ========================

    /// Clear and rebuild every row
    pub fn populate_item_list(&mut self, items: &[Item]) {
        self.rows = items.iter().map(ListRow::from).collect();
        self.show_list();
    }

    pub fn add_list_item(&mut self, item: &Item) {
        self.show_list();
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == item.id) {
            *row = ListRow::from(item);
        } else {
            self.rows.push(ListRow::from(item));
        }
    }

    /// Redraw the row with the item's ID
    pub fn update_list_item(&mut self, item: &Item) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == item.id) {
            *row = ListRow::from(item);
        }
    }

    pub fn delete_list_item(&mut self, id: u32) {
        self.rows.retain(|row| row.id != id);
    }

    pub fn remove_items(&mut self) {
        self.rows.clear();
    }

    pub fn hide_list(&mut self) {
        self.list_visible = false;
    }

    pub fn show_list(&mut self) {
        self.list_visible = true;
    }

    // ========================
    // Form
    // ========================

    pub fn get_item_input(&self) -> ItemInput {
        self.form.clone()
    }

    pub fn set_name_input(&mut self, name: String) {
        self.form.name = name;
    }

    pub fn set_calories_input(&mut self, calories: String) {
        self.form.calories = calories;
    }

    /// Load the item being edited into the form
    pub fn add_item_to_form(&mut self, current: &Item) {
        self.form = ItemInput::new(current.name.clone(), current.calories.to_string());
        self.show_edit_state();
    }

    pub fn clear_input(&mut self) {
        self.form = ItemInput::default();
    }

    /// Back to add mode with empty fields
    pub fn clear_edit_state(&mut self) {
        self.clear_input();
        self.edit_mode = false;
    }

    pub fn show_edit_state(&mut self) {
        self.edit_mode = true;
    }

    // ========================
    // Total
    // ========================

    pub fn show_total_calories(&mut self, total: i64) {
        self.total_calories = total;
    }

    // ========================
    // Accessors
    // ========================

    pub fn get_selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn form(&self) -> &ItemInput {
        &self.form
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(Selectors::default())
    }

    #[test]
    fn test_element_id_round_trip() {
        assert_eq!(item_element_id(12), "item-12");
        assert_eq!(parse_item_element_id("item-12"), Some(12));
        assert_eq!(parse_item_element_id("item-"), None);
        assert_eq!(parse_item_element_id("item-x"), None);
        assert_eq!(parse_item_element_id("row-3"), None);
    }

    #[test]
    fn test_populate_is_idempotent() {
        let items = vec![Item::new(0, "Eggs", 300), Item::new(1, "Toast", 150)];
        let mut view = renderer();
        view.hide_list();
        view.populate_item_list(&items);
        let once = view.clone();
        view.populate_item_list(&items);

        assert_eq!(view, once);
        assert!(view.is_list_visible());
        assert_eq!(view.rows()[1].element_id, "item-1");
    }

    #[test]
    fn test_row_operations() {
        let mut view = renderer();
        view.add_list_item(&Item::new(0, "Eggs", 300));
        view.add_list_item(&Item::new(1, "Toast", 150));
        view.add_list_item(&Item::new(2, "Juice", 120));

        view.update_list_item(&Item::new(1, "Rye toast", 140));
        assert_eq!(view.rows()[1].name, "Rye toast");
        assert_eq!(view.rows()[1].calories, 140);

        view.delete_list_item(0);
        let ids: Vec<u32> = view.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        view.remove_items();
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_update_unknown_row_is_ignored() {
        let mut view = renderer();
        view.add_list_item(&Item::new(0, "Eggs", 300));
        let before = view.clone();
        view.update_list_item(&Item::new(9, "Ghost", 1));
        assert_eq!(view, before);
    }

    #[test]
    fn test_edit_state() {
        let mut view = renderer();
        view.add_item_to_form(&Item::new(0, "Eggs", 300));
        assert!(view.is_edit_mode());
        assert_eq!(view.get_item_input(), ItemInput::new("Eggs", "300"));

        view.clear_edit_state();
        assert!(!view.is_edit_mode());
        assert_eq!(view.get_item_input(), ItemInput::default());
    }

    #[test]
    fn test_form_binding() {
        let mut view = renderer();
        view.set_name_input("Soup".to_string());
        view.set_calories_input("200".to_string());
        assert_eq!(view.get_item_input(), ItemInput::new("Soup", "200"));
        view.clear_input();
        assert_eq!(view.form(), &ItemInput::default());
    }
}
