//! ==============================================================================
//! lib.rs - sign-up form app
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm app rendering a client-side sign-up form. the form
//!     validates on every mutation, previews a selected image inline,
//!     and logs the submitted payload to the console.
//!
//! architecture:
//!     - leptos csr (client-side rendering), compiled to wasm
//!     - routes: / (greeting), /users/signup (the form), fallback 404
//!     - validation engine and form model live in the shared crate
//!     - the one async operation is the image-to-data-url read
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod components;
mod preview;
mod submit;

use components::{Header, SignupForm};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sign Up" />
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/users/signup") view=SignupPage />
                </Routes>
            </main>
        </Router>
    }
}

// ==============================================================================
// pages
// ==============================================================================

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="card home">
            <h2>"Home"</h2>
            <p>"Welcome. Create an account to get started."</p>
            <A href="/users/signup">"Sign up"</A>
        </div>
    }
}

#[component]
fn SignupPage() -> impl IntoView {
    view! {
        <Header />
        <SignupForm />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"404"</h2>
            <p>"Page not found"</p>
            <A href="/">"Back home"</A>
        </div>
    }
}
