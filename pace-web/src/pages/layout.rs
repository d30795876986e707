use crate::Route;
use dioxus::prelude::*;

/// App chrome: header with title and nav, content outlet below.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        header { class: "border-b border-gray-800",
            div { class: "container mx-auto px-6 py-4 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "text-lg font-semibold text-white",
                    "pace"
                }
                nav { class: "flex items-center gap-4 text-sm",
                    Link {
                        to: Route::Home {},
                        class: "text-gray-400 hover:text-white transition-colors",
                        "Home"
                    }
                    Link {
                        to: Route::NewSession {},
                        class: "text-gray-400 hover:text-white transition-colors",
                        "New session"
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
