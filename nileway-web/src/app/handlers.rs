//! Callback constructors wiring `AppState` to the components.

use crate::app::state::{AppState, ToastState};
use crate::dom;
use gloo::timers::future::TimeoutFuture;
use nileway_core::Lang;
use nileway_core::gallery::{self, CardRect, Viewport};
use nileway_core::toast::{Severity, ToastPhase};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

pub struct Handlers {
    pub lang_change: Callback<Lang>,
    pub menu_toggle: Callback<()>,
    pub menu_close: Callback<()>,
    pub notify: Callback<(String, Severity)>,
    pub card_click: Callback<(usize, MouseEvent)>,
    pub overlay_click: Callback<()>,
}

#[must_use]
pub fn build(state: &AppState) -> Handlers {
    Handlers {
        lang_change: build_lang_change(state),
        menu_toggle: build_menu_toggle(state),
        menu_close: build_menu_close(state),
        notify: build_notify(state),
        card_click: build_card_click(state),
        overlay_click: build_overlay_click(state),
    }
}

pub fn build_lang_change(state: &AppState) -> Callback<Lang> {
    let current_language = state.current_language.clone();
    Callback::from(move |lang: Lang| {
        crate::i18n::set_lang(lang.code());
        current_language.set(lang);
    })
}

pub fn build_menu_toggle(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| {
        let next = !*menu_open;
        dom::set_body_scroll_lock(next);
        menu_open.set(next);
    })
}

pub fn build_menu_close(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| {
        dom::set_body_scroll_lock(false);
        menu_open.set(false);
    })
}

pub fn build_notify(state: &AppState) -> Callback<(String, Severity)> {
    let toast = state.toast.clone();
    let generation = state.toast_generation.clone();
    Callback::from(move |(message, severity): (String, Severity)| {
        // Taking a new ticket strands any transition the previous toast
        // still has pending.
        let ticket = generation.get().wrapping_add(1);
        generation.set(ticket);
        toast.set(Some(ToastState {
            message: message.clone(),
            severity,
            phase: ToastPhase::Mounting,
        }));
        run_toast_cycle(toast.clone(), generation.clone(), ticket, message, severity);
    })
}

fn run_toast_cycle(
    toast: UseStateHandle<Option<ToastState>>,
    generation: Rc<Cell<u64>>,
    ticket: u64,
    message: String,
    severity: Severity,
) {
    spawn_local(async move {
        let mut phase = ToastPhase::Mounting;
        while let Some((next, delay)) = phase.next() {
            TimeoutFuture::new(delay).await;
            if generation.get() != ticket {
                return;
            }
            phase = next;
            if phase == ToastPhase::Hidden {
                toast.set(None);
            } else {
                toast.set(Some(ToastState {
                    message: message.clone(),
                    severity,
                    phase,
                }));
            }
        }
    });
}

pub fn build_card_click(state: &AppState) -> Callback<(usize, MouseEvent)> {
    let overlay_open = state.overlay_open.clone();
    let active_card = state.active_card.clone();
    let card_transform = state.card_transform.clone();
    let generation = state.gallery_generation.clone();
    Callback::from(move |(index, event): (usize, MouseEvent)| {
        if *overlay_open {
            close_viewer(&overlay_open, &active_card, &card_transform, &generation);
            return;
        }
        let Some(rect) = event_card_rect(&event) else {
            return;
        };
        generation.set(generation.get().wrapping_add(1));
        overlay_open.set(true);
        active_card.set(Some(index));
        card_transform.set(Some(gallery::center_transform(rect, current_viewport()).css()));
    })
}

pub fn build_overlay_click(state: &AppState) -> Callback<()> {
    let overlay_open = state.overlay_open.clone();
    let active_card = state.active_card.clone();
    let card_transform = state.card_transform.clone();
    let generation = state.gallery_generation.clone();
    Callback::from(move |()| {
        if *overlay_open {
            close_viewer(&overlay_open, &active_card, &card_transform, &generation);
        }
    })
}

fn close_viewer(
    overlay_open: &UseStateHandle<bool>,
    active_card: &UseStateHandle<Option<usize>>,
    card_transform: &UseStateHandle<Option<String>>,
    generation: &Rc<Cell<u64>>,
) {
    overlay_open.set(false);
    // Dropping the computed transform sends the card back to its resting
    // scatter transform; the active class stays on through the reverse
    // transition so the card keeps its raised stacking order.
    card_transform.set(None);
    let ticket = generation.get().wrapping_add(1);
    generation.set(ticket);
    let active_card = active_card.clone();
    let generation = generation.clone();
    spawn_local(async move {
        TimeoutFuture::new(gallery::CLOSE_CLEANUP_MS).await;
        if generation.get() == ticket {
            active_card.set(None);
        }
    });
}

fn event_card_rect(event: &MouseEvent) -> Option<CardRect> {
    let el: web_sys::Element = event.current_target()?.dyn_into().ok()?;
    let rect = el.get_bounding_client_rect();
    Some(CardRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn current_viewport() -> Viewport {
    let win = dom::window();
    Viewport {
        width: win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        height: win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}
