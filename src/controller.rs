//! App Controller
//!
//! Dispatches UI commands to the store, the renderer and local storage.
//! Every action runs as: mutate store, re-render, persist.

use crate::config::Selectors;
use crate::error::{StorageResult, TrackerError, TrackerResult};
use crate::storage::{Persistence, StorageBackend};
use crate::store::ItemStore;
use crate::view::Renderer;

/// One user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add the item in the form
    Add,
    /// Load an item into the form for editing
    Edit(u32),
    /// Save the form onto the item being edited
    Update,
    /// Delete the item being edited
    Delete,
    /// Leave edit mode without saving
    Back,
    ClearAll,
}

/// Page session: the store, the renderer and the persistence adapter
#[derive(Debug)]
pub struct Controller<B> {
    store: ItemStore,
    view: Renderer,
    persistence: Persistence<B>,
}

impl<B: StorageBackend> Controller<B> {
    /// Load persisted items and render the initial page
    pub fn init(persistence: Persistence<B>, selectors: Selectors) -> Self {
        let loaded = persistence
            .get_items_from_storage()
            .map_err(|e| e.to_string())
            .and_then(|items| ItemStore::from_items(items).map_err(|e| e.to_string()));
        let store = match loaded {
            Ok(store) => store,
            Err(e) => {
                log::error!("failed to load items from '{}': {}", persistence.key(), e);
                ItemStore::default()
            }
        };
        log::info!("loaded {} items", store.get_items().len());

        let mut controller = Self {
            store,
            view: Renderer::new(selectors),
            persistence,
        };
        controller.render_initial();
        controller
    }

    fn render_initial(&mut self) {
        self.view.clear_edit_state();
        let items = self.store.get_items();
        if items.is_empty() {
            self.view.hide_list();
        } else {
            self.view.populate_item_list(items);
        }
        self.show_total();
    }

    pub fn dispatch(&mut self, command: Command) -> TrackerResult<()> {
        log::debug!("dispatch {:?}", command);
        match command {
            Command::Add => self.item_add_submit(),
            Command::Edit(id) => self.item_edit_click(id),
            Command::Update => self.item_update_submit(),
            Command::Delete => self.item_delete_submit(),
            Command::Back => {
                self.back_click();
                Ok(())
            }
            Command::ClearAll => {
                self.clear_all_items_click();
                Ok(())
            }
        }
    }

    fn item_add_submit(&mut self) -> TrackerResult<()> {
        let input = self.view.get_item_input();
        if !input.is_complete() {
            return Err(TrackerError::EmptyInput);
        }

        let item = self.store.add_item(&input.name, &input.calories)?;
        self.view.add_list_item(&item);
        self.show_total();
        self.persist(self.persistence.store_item(&item));
        self.view.clear_input();
        Ok(())
    }

    fn item_edit_click(&mut self, id: u32) -> TrackerResult<()> {
        let current = self.store.set_current_item(id)?;
        self.view.add_item_to_form(current);
        Ok(())
    }

    fn item_update_submit(&mut self) -> TrackerResult<()> {
        let input = self.view.get_item_input();
        let updated = self.store.update_item(&input.name, &input.calories)?;
        self.view.update_list_item(&updated);
        self.show_total();
        self.view.clear_edit_state();
        self.persist(self.persistence.update_item_storage(&updated));
        Ok(())
    }

    fn item_delete_submit(&mut self) -> TrackerResult<()> {
        let id = self
            .store
            .get_current_item()
            .map(|item| item.id)
            .ok_or(TrackerError::NoCurrentItem)?;

        self.store.delete_item(id)?;
        self.view.delete_list_item(id);
        self.show_total();
        self.persist(self.persistence.delete_item_from_storage(id));
        self.view.clear_edit_state();
        Ok(())
    }

    fn back_click(&mut self) {
        self.store.clear_current_item();
        self.view.clear_edit_state();
    }

    fn clear_all_items_click(&mut self) {
        self.store.clear_all_items();
        self.show_total();
        self.view.remove_items();
        self.persist(self.persistence.clear_items_from_storage());
        self.view.hide_list();
        self.view.clear_edit_state();
    }

    fn show_total(&mut self) {
        self.view.show_total_calories(self.store.get_total_calories());
    }

    /// Memory stays authoritative when local storage fails
    fn persist(&self, result: StorageResult<()>) {
        if let Err(e) = result {
            log::error!("failed to persist to '{}': {}", self.persistence.key(), e);
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn view(&self) -> &Renderer {
        &self.view
    }

    /// Form fields are bound straight to the renderer
    pub fn view_mut(&mut self) -> &mut Renderer {
        &mut self.view
    }

    #[cfg(test)]
    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }
}
