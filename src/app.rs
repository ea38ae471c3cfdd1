//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::login_form::LoginForm;

/// Root component — sets the document title and renders the login form.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Login"/>
        <LoginForm/>
    }
}
