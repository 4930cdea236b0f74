//! Item Store
//!
//! The in-memory, authoritative list of items for the page session.

use crate::error::{TrackerError, TrackerResult};
use crate::models::Item;

/// Ordered item list plus the ID counter and the item being edited
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
    /// ID handed to the next added item
    next_id: u32,
    /// ID of the item loaded into the edit form
    current_item: Option<u32>,
}

impl ItemStore {
    /// Build a store from a previously persisted list
    pub fn from_items(items: Vec<Item>) -> TrackerResult<Self> {
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(max) => max.checked_add(1).ok_or(TrackerError::IdsExhausted)?,
            None => 0,
        };
        Ok(Self {
            items,
            next_id,
            current_item: None,
        })
    }

    pub fn add_item(&mut self, name: &str, calories: &str) -> TrackerResult<Item> {
        let calories = parse_calories(calories)?;
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(TrackerError::IdsExhausted)?;
        let item = Item::new(id, name, calories);
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn get_items(&self) -> &[Item] {
        &self.items
    }

    pub fn get_item_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Load an existing item into the edit cycle
    pub fn set_current_item(&mut self, id: u32) -> TrackerResult<&Item> {
        let index = self.position(id).ok_or(TrackerError::NotFound(id))?;
        self.current_item = Some(id);
        Ok(&self.items[index])
    }

    pub fn get_current_item(&self) -> Option<&Item> {
        self.current_item.and_then(|id| self.get_item_by_id(id))
    }

    pub fn clear_current_item(&mut self) {
        self.current_item = None;
    }

    /// Overwrite name and calories of the current item, ending the edit cycle
    pub fn update_item(&mut self, name: &str, calories: &str) -> TrackerResult<Item> {
        let id = self.current_item.ok_or(TrackerError::NoCurrentItem)?;
        let index = self.position(id).ok_or(TrackerError::NotFound(id))?;
        let calories = parse_calories(calories)?;

        let item = &mut self.items[index];
        item.name = name.to_string();
        item.calories = calories;
        let updated = item.clone();

        self.current_item = None;
        Ok(updated)
    }

    /// Remove by ID, returning the removed item
    pub fn delete_item(&mut self, id: u32) -> TrackerResult<Item> {
        let index = self.position(id).ok_or(TrackerError::NotFound(id))?;
        if self.current_item == Some(id) {
            self.current_item = None;
        }
        Ok(self.items.remove(index))
    }

    pub fn clear_all_items(&mut self) {
        self.items.clear();
        self.next_id = 0;
        self.current_item = None;
    }

    /// Saturates instead of overflowing on hand-edited storage
    pub fn get_total_calories(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.calories))
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// Lenient integer parse of a calorie field.
///
/// Surrounding whitespace and trailing junk are ignored, so `"12.5"` is 12 and
/// `"300kcal"` is 300. Input without leading digits, or outside the `i32`
/// range, is rejected.
pub fn parse_calories(input: &str) -> TrackerResult<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return Err(TrackerError::InvalidCalories(input.to_string()));
    }

    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    let value: i32 = signed
        .parse()
        .map_err(|_| TrackerError::InvalidCalories(input.to_string()))?;
    Ok(i64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, &str)]) -> ItemStore {
        let mut store = ItemStore::default();
        for (name, calories) in entries {
            store.add_item(name, calories).unwrap();
        }
        store
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = store_with(&[("Eggs", "300"), ("Toast", "150"), ("Juice", "120")]);
        let ids: Vec<u32> = store.get_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(store.get_items()[0], Item::new(0, "Eggs", 300));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = store_with(&[("Eggs", "300"), ("Toast", "150")]);
        store.delete_item(1).unwrap();
        let added = store.add_item("Salad", "90").unwrap();
        assert_eq!(added.id, 2);

        store.delete_item(0).unwrap();
        store.delete_item(2).unwrap();
        assert!(store.get_items().is_empty());
        assert_eq!(store.add_item("Soup", "200").unwrap().id, 3);
    }

    #[test]
    fn test_total_is_sum_of_calories() {
        let mut store = ItemStore::default();
        assert_eq!(store.get_total_calories(), 0);

        let mut expected = 0;
        for (i, calories) in [300i64, 150, 0, 75, 1200].iter().enumerate() {
            store.add_item(&format!("Food {}", i), &calories.to_string()).unwrap();
            expected += calories;
            assert_eq!(store.get_total_calories(), expected);
        }
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = store_with(&[("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")]);
        let removed = store.delete_item(2).unwrap();
        assert_eq!(removed.name, "C");

        let names: Vec<&str> = store.get_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D"]);
        assert!(matches!(store.delete_item(2), Err(TrackerError::NotFound(2))));
    }

    #[test]
    fn test_update_keeps_id() {
        let mut store = store_with(&[("Eggs", "300"), ("Toast", "150")]);
        store.set_current_item(0).unwrap();
        let updated = store.update_item("Scrambled eggs", "320").unwrap();

        assert_eq!(updated, Item::new(0, "Scrambled eggs", 320));
        assert_eq!(store.get_item_by_id(0), Some(&updated));
        assert_eq!(store.get_items().len(), 2);
        assert!(store.get_current_item().is_none());
    }

    #[test]
    fn test_update_without_current_item() {
        let mut store = store_with(&[("Eggs", "300")]);
        let before = store.clone();
        assert!(matches!(store.update_item("X", "1"), Err(TrackerError::NoCurrentItem)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_rejects_bad_calories() {
        let mut store = store_with(&[("Eggs", "300")]);
        store.set_current_item(0).unwrap();
        assert!(store.update_item("Eggs", "lots").is_err());
        assert_eq!(store.get_item_by_id(0).unwrap().calories, 300);
        // still editing
        assert_eq!(store.get_current_item().map(|i| i.id), Some(0));
    }

    #[test]
    fn test_set_current_item_unknown_id() {
        let mut store = store_with(&[("Eggs", "300")]);
        assert!(matches!(store.set_current_item(7), Err(TrackerError::NotFound(7))));
        assert!(store.get_current_item().is_none());
    }

    #[test]
    fn test_delete_current_item_clears_it() {
        let mut store = store_with(&[("Eggs", "300")]);
        store.set_current_item(0).unwrap();
        store.delete_item(0).unwrap();
        assert!(store.get_current_item().is_none());
    }

    #[test]
    fn test_from_items_continues_ids() {
        let mut store =
            ItemStore::from_items(vec![Item::new(4, "A", 10), Item::new(2, "B", 20)]).unwrap();
        assert_eq!(store.add_item("C", "30").unwrap().id, 5);
        assert_eq!(ItemStore::from_items(Vec::new()).unwrap().next_id, 0);
    }

    #[test]
    fn test_clear_all() {
        let mut store = store_with(&[("Eggs", "300"), ("Toast", "150")]);
        store.set_current_item(1).unwrap();
        store.clear_all_items();
        assert!(store.get_items().is_empty());
        assert!(store.get_current_item().is_none());
        assert_eq!(store.get_total_calories(), 0);
        assert_eq!(store.add_item("Soup", "200").unwrap().id, 0);
    }

    #[test]
    fn test_parse_calories() {
        assert_eq!(parse_calories("300").unwrap(), 300);
        assert_eq!(parse_calories("  42 ").unwrap(), 42);
        assert_eq!(parse_calories("12.5").unwrap(), 12);
        assert_eq!(parse_calories("300kcal").unwrap(), 300);
        assert_eq!(parse_calories("-50").unwrap(), -50);
        assert_eq!(parse_calories("+7").unwrap(), 7);
        assert!(parse_calories("").is_err());
        assert!(parse_calories("abc").is_err());
        assert!(parse_calories("-").is_err());
        assert_eq!(parse_calories("2147483647").unwrap(), i64::from(i32::MAX));
        assert_eq!(parse_calories("-2147483648").unwrap(), i64::from(i32::MIN));
        assert!(parse_calories("2147483648").is_err());
        assert!(parse_calories("9000000000000000000").is_err());
    }

    #[test]
    fn test_huge_calories_rejected() {
        let mut store = ItemStore::default();
        assert!(matches!(
            store.add_item("A", "9000000000000000000"),
            Err(TrackerError::InvalidCalories(_))
        ));
        assert!(store.add_item("B", "9000000000000000000").is_err());
        store.add_item("C", "2147483647").unwrap();
        store.add_item("D", "2147483647").unwrap();
        assert_eq!(store.get_total_calories(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_total_saturates_on_stored_extremes() {
        let store = ItemStore::from_items(vec![
            Item::new(0, "A", i64::MAX),
            Item::new(1, "B", i64::MAX),
        ])
        .unwrap();
        assert_eq!(store.get_total_calories(), i64::MAX);
    }

    #[test]
    fn test_from_items_with_max_id() {
        let result = ItemStore::from_items(vec![Item::new(u32::MAX, "A", 1)]);
        assert!(matches!(result, Err(TrackerError::IdsExhausted)));
    }

    #[test]
    fn test_add_when_ids_run_out() {
        let mut store = ItemStore::from_items(vec![Item::new(u32::MAX - 2, "A", 1)]).unwrap();
        assert_eq!(store.add_item("B", "2").unwrap().id, u32::MAX - 1);
        let before = store.clone();
        assert!(matches!(store.add_item("C", "3"), Err(TrackerError::IdsExhausted)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_invalid_calories_leaves_store_unchanged() {
        let mut store = store_with(&[("Eggs", "300")]);
        let before = store.clone();
        assert!(matches!(
            store.add_item("Toast", "a lot"),
            Err(TrackerError::InvalidCalories(_))
        ));
        assert_eq!(store, before);
    }
}
