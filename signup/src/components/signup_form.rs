//! Sign-up form component
//!
//! Owns all form state: field values, touched flags, and the derived
//! validation errors. Errors are recomputed from the values on every
//! mutation; touched flags and the submitted flag only decide whether a
//! field's error is shown.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use shared::{validate, FieldError, FileMeta, FormValues, Gender, TouchedState};

use crate::preview;
use crate::submit::{self, SubmitPayload};

#[component]
pub fn SignupForm() -> impl IntoView {
    let (values, set_values) = signal(FormValues::default());
    let (touched, set_touched) = signal(TouchedState::default());
    let (submitted, set_submitted) = signal(false);

    // pure function of the current values, recomputed on every mutation
    let errors = Memo::new(move |_| values.with(|v| validate(v)));

    // the raw handle and the preview are independent pieces of state:
    // the handle goes into the payload, the preview is display-only.
    // File is a js handle and not Send, so it lives in a local signal.
    let (image_file, set_image_file) = signal_local(None::<web_sys::File>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (preview_error, set_preview_error) = signal(None::<String>);
    // read generation; a resolution that lost the race to a newer
    // selection is discarded instead of overwriting the preview
    let read_gen = StoredValue::new(0u64);

    // show a field's error only once it was touched or a submit was attempted
    let field_error = move |error: Option<FieldError>, is_touched: bool| {
        (is_touched || submitted.get()).then_some(error).flatten()
    };

    let on_image_change = move |ev: leptos::ev::Event| {
        set_touched.update(|t| t.image = true);
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|list| list.get(0));

        set_values.update(|v| v.image = file.as_ref().map(file_meta));
        set_image_file.set(file.clone());
        set_preview_url.set(None);
        set_preview_error.set(None);

        let Some(file) = file else {
            return;
        };

        let gen = read_gen.get_value() + 1;
        read_gen.set_value(gen);

        leptos::task::spawn_local(async move {
            let result = preview::file_to_data_url(&file).await;
            if read_gen.get_value() != gen {
                // a newer selection is in flight
                return;
            }
            match result {
                Ok(url) => set_preview_url.set(Some(url)),
                Err(err) => set_preview_error.set(Some(err.to_string())),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // a submit attempt reveals every pending error
        set_submitted.set(true);
        set_touched.set(TouchedState::all());

        let current = values.get_untracked();
        if !validate(&current).is_empty() {
            return;
        }
        // validation guarantees the select holds one of the three options
        let Some(gender) = Gender::parse(&current.gender) else {
            return;
        };

        submit::deliver(&SubmitPayload {
            username: current.username,
            email: current.email,
            password: current.password,
            gender,
            image: image_file.get_untracked(),
        });
    };

    view! {
        <div class="form-wrapper">
            <form on:submit=on_submit>
                <div class="field-row">
                    <span class="field-label">"Username"</span>
                    <div class="field-control">
                        <input
                            id="username"
                            name="username"
                            type="text"
                            placeholder="Username"
                            prop:value=move || values.with(|v| v.username.clone())
                            on:input=move |ev| {
                                set_touched.update(|t| t.username = true);
                                set_values.update(|v| v.username = event_target_value(&ev));
                            }
                            on:blur=move |_| set_touched.update(|t| t.username = true)
                        />
                        {move || field_error(errors.get().username, touched.get().username)
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
                    </div>
                </div>

                <div class="field-row">
                    <span class="field-label">"Email"</span>
                    <div class="field-control">
                        <input
                            id="email"
                            name="email"
                            type="text"
                            placeholder="Email"
                            prop:value=move || values.with(|v| v.email.clone())
                            on:input=move |ev| {
                                set_touched.update(|t| t.email = true);
                                set_values.update(|v| v.email = event_target_value(&ev));
                            }
                            on:blur=move |_| set_touched.update(|t| t.email = true)
                        />
                        {move || field_error(errors.get().email, touched.get().email)
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
                    </div>
                </div>

                <div class="field-row">
                    <span class="field-label">"Password"</span>
                    <div class="field-control">
                        <input
                            id="password"
                            name="password"
                            type="password"
                            placeholder="Password"
                            prop:value=move || values.with(|v| v.password.clone())
                            on:input=move |ev| {
                                set_touched.update(|t| t.password = true);
                                set_values.update(|v| v.password = event_target_value(&ev));
                            }
                            on:blur=move |_| set_touched.update(|t| t.password = true)
                        />
                        {move || field_error(errors.get().password, touched.get().password)
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
                    </div>
                </div>

                <div class="field-row">
                    <span class="field-label">"Gender"</span>
                    <div class="field-control">
                        <select
                            id="gender"
                            name="gender"
                            prop:value=move || values.with(|v| v.gender.clone())
                            on:change=move |ev| {
                                set_touched.update(|t| t.gender = true);
                                set_values.update(|v| v.gender = event_target_value(&ev));
                            }
                            on:blur=move |_| set_touched.update(|t| t.gender = true)
                        >
                            <option value="">"Choose a gender"</option>
                            {Gender::ALL
                                .into_iter()
                                .map(|gender| view! {
                                    <option value=gender.as_str()>{gender.as_str()}</option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        {move || field_error(errors.get().gender, touched.get().gender)
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
                    </div>
                </div>

                <div class="field-row">
                    <span class="field-label">"Image"</span>
                    <div class="field-control">
                        {move || preview_url.get().map(|url| {
                            let name = values.with(|v| v.image.as_ref().map(|m| m.name.clone()));
                            view! {
                                <img class="preview-image" src=url alt="preview" />
                                <p class="file-name">{name}</p>
                            }
                        })}
                        <input
                            id="image"
                            name="image"
                            type="file"
                            accept=".jpeg,.jpg,.bmp,.png,.pdf"
                            on:change=on_image_change
                        />
                        // read failures are a notice, not a validation error:
                        // the selected file stays eligible for submission
                        {move || preview_error.get()
                            .map(|msg| view! { <p class="field-error">{msg}</p> })}
                        {move || field_error(errors.get().image, touched.get().image)
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
                    </div>
                </div>

                <div class="button-row">
                    <button type="submit">"Sign Up"</button>
                </div>
            </form>
        </div>
    }
}

fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta {
        name: file.name(),
        content_type: file.type_(),
        size: file.size() as u64,
    }
}
