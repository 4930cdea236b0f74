//! Tracalorie Frontend App
//!
//! Builds the page session and lays out the navbar, form, total and list.

use leptos::prelude::*;

use crate::components::{ItemForm, ItemList, Navbar};
use crate::config::{selector_name, AppConfig};
use crate::context::AppContext;
use crate::controller::Controller;
use crate::storage::{LocalStorage, Persistence};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let persistence = Persistence::new(LocalStorage, config.storage_key.clone());
    let ctx = AppContext::new(Controller::init(persistence, config.selectors.clone()));

    // Provide context to all children
    provide_context(ctx);

    let total_class = selector_name(&config.selectors.total_calories).to_string();

    view! {
        <Navbar />
        <div class="container">
            <ItemForm />
            <h3 class="center-align">
                "Total Calories: "
                <span class=total_class>{move || ctx.total_calories()}</span>
            </h3>
            <ItemList />
        </div>
    }
}
