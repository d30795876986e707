//! pace - plan a focus session, one step at a time

mod pages;
mod sessions;

use dioxus::prelude::*;
use pages::{AppLayout, Home, NewSession, NotFound};
use sessions::provide_sessions;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/new")]
    NewSession {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    provide_sessions();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
