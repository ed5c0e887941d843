pub mod dashboard;
pub mod form_outcome;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;

use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
