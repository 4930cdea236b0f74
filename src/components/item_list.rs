//! Item List Component
//!
//! Rendered rows plus one delegated click listener for the edit icons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::selector_name;
use crate::context::use_app_context;
use crate::controller::Command;
use crate::view::{parse_item_element_id, EDIT_ITEM_CLASS};

/// Item ID of the row whose edit icon was clicked
fn edit_target_id(ev: &web_sys::MouseEvent) -> Option<u32> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    if !target.class_list().contains(EDIT_ITEM_CLASS) {
        return None;
    }
    let row = target.closest("li").ok()??;
    parse_item_element_id(&row.id())
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let list_id = selector_name(&ctx.selectors().item_list).to_string();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(id) = edit_target_id(&ev) {
            ev.prevent_default();
            ctx.dispatch(Command::Edit(id));
        }
    };

    view! {
        <ul
            id=list_id
            class="collection"
            style:display=move || if ctx.list_visible() { "block" } else { "none" }
            on:click=on_click
        >
            <For
                each=move || ctx.rows()
                key=|row| (row.id, row.name.clone(), row.calories)
                children=move |row| {
                    view! {
                        <li class="collection-item" id=row.element_id.clone()>
                            <strong>{row.name.clone()}": "</strong>
                            <em>{row.calories}" Calories"</em>
                            <a href="#" class="secondary-content">
                                <i class=format!("{} fa fa-pencil", EDIT_ITEM_CLASS)></i>
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}
