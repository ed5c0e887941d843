use std::collections::HashMap;

use client::api;
use dioxus::prelude::*;
use shared_types::{ApiError, RegisterRequest};
use shared_ui::{
    Alert, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, FormField,
};

use crate::delay::{self, REDIRECT_DELAY};
use crate::routes::form_outcome::FormOutcome;
use crate::routes::Route;
use crate::session::use_api;

const SIGNUP_SUCCESS: &str = "Signup successful! Redirecting to login...";

fn register_outcome(result: Result<(), ApiError>) -> FormOutcome {
    match result {
        Ok(()) => FormOutcome::success(SIGNUP_SUCCESS, Route::Login {}),
        Err(e) => FormOutcome::failure(e.to_string()),
    }
}

/// Account creation form.
#[component]
pub fn Register() -> Element {
    let client = use_api();
    let mut form = use_signal(RegisterRequest::default);
    let mut outcome = use_signal(|| Option::<FormOutcome>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            outcome.set(None);

            let profile = form();
            let errors = profile.form_errors();
            let invalid = !errors.is_empty();
            field_errors.set(errors);
            if invalid {
                return;
            }

            loading.set(true);
            let next = register_outcome(api::register(&client, &profile).await);
            let redirect = next.redirect.clone();
            outcome.set(Some(next));
            match redirect {
                Some(route) => {
                    tracing::info!(username = %profile.username, "registration accepted");
                    delay::sleep(REDIRECT_DELAY).await;
                    navigator().push(route);
                }
                None => loading.set(false),
            }
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();
    let current = form();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader { title: "Create an Account" }
                CardContent {
                    form { onsubmit: handle_register,
                        FormField {
                            label: "Username",
                            name: "username",
                            placeholder: "Username",
                            value: current.username,
                            error: field_error("username"),
                            on_input: move |e: FormEvent| form.write().username = e.value(),
                        }
                        FormField {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "Email",
                            value: current.email,
                            error: field_error("email"),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        FormField {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "********",
                            value: current.password,
                            error: field_error("password"),
                            on_input: move |e: FormEvent| form.write().password = e.value(),
                        }
                        FormField {
                            label: "Name",
                            name: "employee_name",
                            placeholder: "Name",
                            value: current.employee_name,
                            error: field_error("employee_name"),
                            on_input: move |e: FormEvent| form.write().employee_name = e.value(),
                        }
                        FormField {
                            label: "Date of birth",
                            name: "date_of_birth",
                            input_type: "date",
                            placeholder: "YYYY-MM-DD",
                            value: current.date_of_birth,
                            error: field_error("date_of_birth"),
                            on_input: move |e: FormEvent| form.write().date_of_birth = e.value(),
                        }
                        FormField {
                            label: "Phone Number",
                            name: "phone_number",
                            input_type: "tel",
                            placeholder: "Phone Number",
                            value: current.phone_number,
                            error: field_error("phone_number"),
                            on_input: move |e: FormEvent| form.write().phone_number = e.value(),
                        }
                        Button {
                            button_type: "submit",
                            variant: ButtonVariant::Secondary,
                            busy: loading(),
                            busy_label: "Signing up...",
                            "Sign Up"
                        }
                    }

                    if let Some(done) = outcome() {
                        Alert { tone: done.tone, message: done.message }
                    }
                }
                CardFooter {
                    p { class: "auth-footer-text",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "auth-link", "Login" }
                    }
                }
            }
        }
    }
}
