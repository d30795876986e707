//! Render assertions for the pure view components.
//!
//! Views are rendered to an HTML string through a server-side VirtualDom;
//! callbacks are wired to no-ops since only the markup is under test.

use dioxus::prelude::*;
use pace_ui::{DurationStepView, ErrorPageView, GENERIC_ERROR_MESSAGE};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_error_page_shows_message_verbatim() {
    fn app() -> Element {
        rsx! {
            ErrorPageView {
                error: Some("library exploded".to_string()),
                on_retry: |_| {},
                on_home: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("library exploded"));
    assert!(!html.contains(GENERIC_ERROR_MESSAGE));
}

#[test]
fn test_error_page_falls_back_when_error_absent() {
    fn app() -> Element {
        rsx! {
            ErrorPageView { on_retry: |_| {}, on_home: |_| {} }
        }
    }

    let html = render(app);
    assert!(html.contains(GENERIC_ERROR_MESSAGE));
}

#[test]
fn test_error_page_falls_back_when_error_empty() {
    fn app() -> Element {
        rsx! {
            ErrorPageView {
                error: Some(String::new()),
                on_retry: |_| {},
                on_home: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains(GENERIC_ERROR_MESSAGE));
}

#[test]
fn test_error_page_offers_retry_and_home() {
    fn app() -> Element {
        rsx! {
            ErrorPageView { on_retry: |_| {}, on_home: |_| {} }
        }
    }

    let html = render(app);
    assert!(html.contains("Retry"));
    assert!(html.contains("Back to Home"));
}

#[test]
fn test_duration_step_binds_value_with_native_constraints() {
    fn app() -> Element {
        rsx! {
            DurationStepView {
                duration: "45".to_string(),
                on_duration_change: |_| {},
                on_next: |_| {},
                on_back: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"type="number""#));
    assert!(html.contains(r#"min="1""#));
    assert!(html.contains("required"));
    assert!(html.contains(r#"value="45""#));
}

#[test]
fn test_duration_step_back_never_submits() {
    fn app() -> Element {
        rsx! {
            DurationStepView {
                duration: String::new(),
                on_duration_change: |_| {},
                on_next: |_| {},
                on_back: |_| {},
            }
        }
    }

    let html = render(app);
    // Next submits the form; Back is an ordinary button.
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains(r#"type="button""#));
}
