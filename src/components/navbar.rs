//! Navbar Component
//!
//! Brand and the clear-all button.

use leptos::prelude::*;

use crate::config::selector_name;
use crate::context::use_app_context;
use crate::controller::Command;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let clear_class = format!(
        "{} btn blue lighten-3",
        selector_name(&ctx.selectors().clear_btn)
    );

    view! {
        <nav>
            <div class="nav-wrapper blue">
                <div class="container">
                    <a href="#" class="brand-logo center">"Tracalorie"</a>
                    <ul class="right">
                        <li>
                            <a
                                href="#"
                                class=clear_class
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.dispatch(Command::ClearAll);
                                }
                            >
                                "Clear All"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
