use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::QuizSession;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizScreen, focus_target, key_intent, map_quiz_screen};

use super::components::{QuestionScreen, ResultsScreen, StartScreen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut session = use_signal(move || QuizSession::new(catalog));
    let mut last_focus = use_signal(|| None::<&'static str>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        tracing::debug!(?intent, "quiz intent");
        intent.apply(&mut session.write());
    });

    // Returns whether the key was consumed.
    let handle_key = use_callback(move |key: String| {
        let intent = key_intent(&session.read(), &key);
        if let Some(intent) = intent {
            dispatch_intent.call(intent);
        }
        intent.is_some()
    });

    use_effect(move || {
        let target = focus_target(&map_quiz_screen(&session.read()));
        if last_focus() == Some(target) {
            return;
        }
        last_focus.set(Some(target));
        let js = format!("document.getElementById({target:?})?.focus();");
        let _ = eval(&js);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, handle_key, session);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        if handle_key.call(evt.data.key().to_string()) {
            evt.prevent_default();
        }
    };

    let screen = map_quiz_screen(&session.read());

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match screen {
                QuizScreen::Start(vm) => rsx! {
                    StartScreen { vm, on_intent: dispatch_intent }
                },
                QuizScreen::Question(vm) => rsx! {
                    QuestionScreen { vm, on_intent: dispatch_intent }
                },
                QuizScreen::Results(vm) => rsx! {
                    ResultsScreen { vm, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    key: Rc<RefCell<Option<Callback<String, bool>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        key: Callback<String, bool>,
        session: Signal<QuizSession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.key.borrow_mut() = Some(key);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn key(&self) -> Callback<String, bool> {
        (*self.key.borrow()).expect("quiz key handler registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
