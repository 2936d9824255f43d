use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__badge", "EL" }
                    span { class: "site-header__title", "{title}" }
                }
                Link { class: "site-header__home", to: Route::Quiz {}, "Home" }
            }
        }
    }
}

#[component]
pub(crate) fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let year = ctx.current_year();
    let title = ctx.title().to_string();

    rsx! {
        footer { class: "site-footer",
            "© {year} {title}"
        }
    }
}
