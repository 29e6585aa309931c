//! Settings Panel Component

use leptos::prelude::*;
use todo_store::Intent;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

/// "Disable confirmation" checkbox; saved as soon as it changes
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="settings">
            <label>
                <input
                    id="disable-alert-checkbox"
                    type="checkbox"
                    prop:checked=move || ctx.view.disable_confirmation().get()
                    on:change=move |ev| ctx.dispatch(Intent::ConfirmationToggled(event_target_checked(&ev)))
                />
                " Disable confirmation alerts"
            </label>
        </div>
    }
}
