use dioxus::prelude::*;

use services::QuizIntent;

use crate::vm::ResultVm;

#[component]
pub fn ResultPanel(
    result: ResultVm,
    notice: Option<&'static str>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "result", id: "quiz-result",
            div { class: "result__eyebrow", "Quiz complete" }
            h2 { class: "result__title", "Your result" }

            div { class: "progress-bar",
                div { class: "progress-bar__fill", style: "width: {result.percent}%" }
            }
            div { class: result.tier_class(), "{result.percent_label}" }
            div { class: "result__count", "{result.count_label}" }

            div { class: "result__actions",
                button {
                    class: "btn btn-primary",
                    id: "quiz-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Restart"
                }
                // Only reports that explanations are unavailable.
                button {
                    class: "btn btn-secondary",
                    id: "quiz-explanations",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ViewExplanations),
                    "View detailed explanations"
                }
            }
            if let Some(notice) = notice {
                p { class: "result__notice", "{notice}" }
            }
        }
    }
}
