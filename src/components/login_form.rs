//! Login form with username/password fields and a demo profile fetch.

use leptos::prelude::*;

use crate::state::login::LoginState;

/// Login form bound to a local [`LoginState`] signal.
///
/// Submitting fires a GET against the fixed placeholder endpoint — the
/// entered credentials are never sent. The fetched profile name renders
/// above the form, and a failure toggles the error text visible. The button
/// stays clickable while a fetch is in flight; overlapping submits resolve
/// last-writer-wins.
#[component]
pub fn LoginForm() -> impl IntoView {
    let form = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        form.update(LoginState::begin_submit);

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_user().await;
                if let Err(e) = &outcome {
                    log::warn!("user fetch failed: {e}");
                }
                form.update(|f| f.resolve(outcome));
            });
        }
    };

    view! {
        <div class="login-form">
            <span class="login-form__user">
                {move || form.get().display_name().to_owned()}
            </span>
            <form>
                <input
                    type="text"
                    placeholder="username"
                    prop:value=move || form.get().username
                    on:input=move |ev| {
                        form.update(|f| f.username = event_target_value(&ev));
                    }
                />
                <input
                    type="password"
                    placeholder="password"
                    prop:value=move || form.get().password
                    on:input=move |ev| {
                        form.update(|f| f.password = event_target_value(&ev));
                    }
                />
                <button
                    prop:disabled=move || form.get().submit_disabled()
                    on:click=on_submit
                >
                    {move || form.get().submit_label()}
                </button>
                <span
                    class="login-form__error"
                    style:visibility=move || {
                        if form.get().error_visible() { "visible" } else { "hidden" }
                    }
                >
                    "Something went wrong"
                </span>
            </form>
        </div>
    }
}
