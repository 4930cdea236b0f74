//! UI Components
//!
//! Leptos components drawing the tracker state.

mod item_form;
mod item_list;
mod navbar;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use navbar::Navbar;
