use crate::config::DEBOUNCE_MS;
use gloo_timers::callback::Timeout;
use harvest_tiers::session::parse_cooldown_input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for the cooldown input field.
#[derive(Clone)]
pub struct CooldownInput {
    /// The current text content of the input field.
    pub text: String,
    /// The committed cooldown value. Non-numeric text commits as zero.
    pub value: f64,
    /// Callback for the `oninput` event. Updates the text and schedules a
    /// debounced commit.
    pub on_text_input: Callback<InputEvent>,
    /// Commit the current text right away (change event or Enter).
    pub on_commit: Callback<()>,
    /// Programmatically set the value, e.g. after restoring a session.
    pub set_value: Callback<f64>,
}

/// Replace any pending timer with one that commits `text` after the delay.
fn debounce_commit(
    timer: &Rc<RefCell<Option<Timeout>>>,
    value_setter: UseStateHandle<f64>,
    text: String,
    delay_ms: u32,
) {
    let handle = Timeout::new(delay_ms, move || {
        value_setter.set(parse_cooldown_input(&text));
    });
    // Dropping the previous Timeout cancels it
    *timer.borrow_mut() = Some(handle);
}

/// Custom hook managing the cooldown text, its committed value and the
/// debounce between them.
#[hook]
pub fn use_cooldown_input(initial_value: f64) -> CooldownInput {
    let value_handle = use_state(|| initial_value);
    let text_handle = use_state(|| initial_value.to_string());
    let timer = use_mut_ref(|| None::<Timeout>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        let value_setter = value_handle.clone();
        let timer = timer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            text_setter.set(text.clone());
            debounce_commit(&timer, value_setter.clone(), text, DEBOUNCE_MS);
        })
    };

    let on_commit = {
        let current_text = text_handle.clone();
        let value_setter = value_handle.clone();
        let timer = timer.clone();
        Callback::from(move |_| {
            timer.borrow_mut().take();
            value_setter.set(parse_cooldown_input(&current_text));
        })
    };

    let set_value = {
        let value_setter = value_handle.clone();
        let text_setter = text_handle.clone();
        let timer = timer.clone();
        Callback::from(move |new_val: f64| {
            timer.borrow_mut().take();
            value_setter.set(new_val);
            text_setter.set(new_val.to_string());
        })
    };

    CooldownInput {
        text: (*text_handle).clone(),
        value: *value_handle,
        on_text_input,
        on_commit,
        set_value,
    }
}
