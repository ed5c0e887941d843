use std::collections::HashMap;

use client::api;
use dioxus::prelude::*;
use shared_types::{ApiError, LoginRequest, LoginResponse};
use shared_ui::{Alert, Button, Card, CardContent, CardFooter, CardHeader, FormField};

use crate::delay::{self, REDIRECT_DELAY};
use crate::routes::form_outcome::FormOutcome;
use crate::routes::Route;
use crate::session::use_api;

const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";

/// Map the login call's result to the banner and the next route.
fn login_outcome(result: Result<Option<LoginResponse>, ApiError>) -> FormOutcome {
    match result {
        Ok(_) => FormOutcome::success(LOGIN_SUCCESS, Route::Dashboard {}),
        Err(e) => FormOutcome::failure(e.to_string()),
    }
}

/// Username/password sign-in. On success the session cookie is stored by
/// the client and the dashboard opens after a short pause.
#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut outcome = use_signal(|| Option::<FormOutcome>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            outcome.set(None);

            let credentials = LoginRequest {
                username: username(),
                password: password(),
            };
            let errors = credentials.form_errors();
            let invalid = !errors.is_empty();
            field_errors.set(errors);
            if invalid {
                return;
            }

            loading.set(true);
            let next = login_outcome(api::login(&client, &credentials).await);
            let redirect = next.redirect.clone();
            outcome.set(Some(next));
            match redirect {
                Some(route) => {
                    tracing::info!("login accepted, opening dashboard");
                    delay::sleep(REDIRECT_DELAY).await;
                    navigator().push(route);
                }
                None => loading.set(false),
            }
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader { title: "Welcome Back" }
                CardContent {
                    form { onsubmit: handle_login,
                        FormField {
                            label: "Username",
                            name: "username",
                            placeholder: "Username",
                            value: username(),
                            error: field_error("username"),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        FormField {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "********",
                            value: password(),
                            error: field_error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            busy: loading(),
                            busy_label: "Logging in...",
                            "Login"
                        }
                    }

                    if let Some(done) = outcome() {
                        Alert { tone: done.tone, message: done.message }
                    }
                }
                CardFooter {
                    p { class: "auth-footer-text",
                        "Don't have an account? "
                        Link { to: Route::Register {}, class: "auth-link", "Sign up" }
                    }
                }
            }
        }
    }
}
