//! Item Form Component
//!
//! Name and calorie inputs with the add button, or the update/delete/back
//! group while an item is being edited.

use leptos::prelude::*;

use crate::config::selector_name;
use crate::context::use_app_context;
use crate::controller::Command;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let selectors = ctx.selectors();

    let name_id = selector_name(&selectors.item_name_input).to_string();
    let calories_id = selector_name(&selectors.item_calories_input).to_string();
    let add_class = format!("{} btn blue darken-3", selector_name(&selectors.add_btn));
    let update_class = format!("{} btn orange", selector_name(&selectors.update_btn));
    let delete_class = format!("{} btn red", selector_name(&selectors.delete_btn));
    let back_class = format!("{} btn grey pull-right", selector_name(&selectors.back_btn));

    // Button click handler for one command
    let on_command = move |command: Command| {
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ctx.dispatch(command);
        }
    };

    let add_display = move || if ctx.edit_mode() { "none" } else { "inline" };
    let edit_display = move || if ctx.edit_mode() { "inline" } else { "none" };

    view! {
        <div class="card">
            <div class="card-content">
                <span class="card-title">"Add Meal / Food Item"</span>
                <form
                    class="col"
                    on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()
                    on:keypress=|ev: web_sys::KeyboardEvent| {
                        // Enter never submits; only the buttons act
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                        }
                    }
                >
                    <div class="row">
                        <div class="input-field col s6">
                            <input
                                type="text"
                                id=name_id.clone()
                                placeholder="Add Item"
                                prop:value=move || ctx.form().name
                                on:input=move |ev| ctx.set_name_input(event_target_value(&ev))
                            />
                            <label for=name_id>"Meal"</label>
                        </div>
                        <div class="input-field col s6">
                            <input
                                type="text"
                                id=calories_id.clone()
                                placeholder="Add Calories"
                                prop:value=move || ctx.form().calories
                                on:input=move |ev| ctx.set_calories_input(event_target_value(&ev))
                            />
                            <label for=calories_id>"Calories"</label>
                        </div>
                        <button class=add_class style:display=add_display on:click=on_command(Command::Add)>
                            "Add Meal"
                        </button>
                        <button class=update_class style:display=edit_display on:click=on_command(Command::Update)>
                            "Update Meal"
                        </button>
                        <button class=delete_class style:display=edit_display on:click=on_command(Command::Delete)>
                            "Delete Meal"
                        </button>
                        <button class=back_class style:display=edit_display on:click=on_command(Command::Back)>
                            "Back"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
