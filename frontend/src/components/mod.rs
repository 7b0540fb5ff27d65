pub mod auth_screen;
pub mod charts;
pub mod dashboard;
pub mod expense_list;
pub mod forms;
pub mod header;
pub mod main_screen;
pub mod permission_screen;
pub mod plan_modal;
pub mod summary_cards;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Forward the current value of an `<input>` to `callback`
pub fn input_handler(callback: &Callback<String>) -> Callback<InputEvent> {
    let callback = callback.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        callback.emit(input.value());
    })
}

/// Forward the selected value of a `<select>` to `callback`
pub fn select_handler(callback: &Callback<String>) -> Callback<Event> {
    let callback = callback.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        callback.emit(select.value());
    })
}

/// `onsubmit` that stops the browser navigation and emits `callback`
pub fn submit_handler(callback: &Callback<()>) -> Callback<SubmitEvent> {
    let callback = callback.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        callback.emit(());
    })
}
