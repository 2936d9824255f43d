use dioxus::prelude::*;

use quiz_core::quiz::QuizState;
use services::{QuizIntent, QuizOutcome};

use crate::context::AppContext;
use crate::views::result::ResultPanel;
use crate::vm::{OptionCellVm, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const EXPLANATIONS_NOTICE: &str = "Detailed explanations are not available yet.";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();

    let vm = use_signal({
        let quiz = quiz.clone();
        move || QuizVm::new(quiz.start_quiz())
    });
    let notice = use_signal(|| None::<&'static str>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut notice = notice;
        let outcome = vm.write().dispatch(&quiz, intent);
        match outcome {
            QuizOutcome::NotImplemented => {
                tracing::debug!("showing explanations notice");
                notice.set(Some(EXPLANATIONS_NOTICE));
            }
            QuizOutcome::Restarted => notice.set(None),
            _ => {}
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let state = vm.read().state();
        match evt.data.key() {
            Key::Enter => {
                evt.prevent_default();
                match state {
                    QuizState::Answering => dispatch_intent.call(QuizIntent::Submit),
                    QuizState::Locked => dispatch_intent.call(QuizIntent::Next),
                    QuizState::Complete => {}
                }
            }
            Key::Character(value) => {
                if state == QuizState::Complete {
                    if value.eq_ignore_ascii_case("r") {
                        evt.prevent_default();
                        dispatch_intent.call(QuizIntent::Restart);
                    }
                    return;
                }
                let option_id = vm.read().option_for_key(&value);
                if let Some(option_id) = option_id {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Choose(option_id));
                }
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let result = vm_guard.result();
    let state = vm_guard.state();
    let counter_label = vm_guard.counter_label();
    let heading_label = vm_guard.heading_label();
    let percent = vm_guard.progress_percent();
    let prompt = vm_guard.prompt().to_string();
    let cells = vm_guard.option_cells();
    let feedback = vm_guard.feedback();
    let can_submit = vm_guard.can_submit();
    let next_label = vm_guard.next_label();
    let score_label = vm_guard.score_label();
    drop(vm_guard);
    let notice = *notice.read();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            if let Some(result) = result {
                ResultPanel { result, notice, on_intent: dispatch_intent }
            } else {
                div { class: "quiz-progress",
                    div { class: "quiz-progress__meta",
                        span { "{counter_label}" }
                        span { "{percent}%" }
                    }
                    div { class: "progress-bar",
                        div { class: "progress-bar__fill", style: "width: {percent}%" }
                    }
                }
                div { class: "quiz-card",
                    div { class: "quiz-card__eyebrow", "{heading_label}" }
                    h2 { class: "quiz-card__prompt", "{prompt}" }
                    ul { class: "quiz-options",
                        for cell in cells {
                            li { key: "{cell.id}",
                                OptionButton { cell: cell.clone(), on_intent: dispatch_intent }
                            }
                        }
                    }
                    div { class: "quiz-card__footer",
                        div { class: "quiz-feedback-slot",
                            if let Some(feedback) = feedback {
                                span { class: feedback.class(), "{feedback.text}" }
                            }
                        }
                        if state == QuizState::Answering {
                            button {
                                class: "btn btn-primary",
                                id: "quiz-submit",
                                r#type: "button",
                                disabled: !can_submit,
                                onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                                "Submit"
                            }
                        } else {
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-next",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                                "{next_label}"
                            }
                        }
                    }
                }
                p { class: "quiz-score", "{score_label}" }
            }
        }
    }
}

#[component]
fn OptionButton(cell: OptionCellVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let option_id = cell.id.clone();
    let dom_id = format!("quiz-option-{}", cell.id);

    rsx! {
        button {
            class: cell.class(),
            id: "{dom_id}",
            r#type: "button",
            disabled: cell.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Choose(option_id.clone())),
            span { class: cell.badge_class(), "{cell.id}" }
            span { class: "quiz-option__text", "{cell.text}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
