use nileway_core::Lang;
use nileway_core::toast::{Severity, ToastPhase};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// The single notification toast, when one is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

/// Everything the page tracks between events. Each field has exactly one
/// writer among the handlers; the generation cells let pending timer
/// continuations recognize they have been superseded.
#[derive(Clone)]
pub struct AppState {
    pub current_language: UseStateHandle<Lang>,
    pub menu_open: UseStateHandle<bool>,
    pub toast: UseStateHandle<Option<ToastState>>,
    pub toast_generation: Rc<Cell<u64>>,
    pub overlay_open: UseStateHandle<bool>,
    pub active_card: UseStateHandle<Option<usize>>,
    pub card_transform: UseStateHandle<Option<String>>,
    pub gallery_generation: Rc<Cell<u64>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        current_language: use_state(crate::i18n::current_lang),
        menu_open: use_state(|| false),
        toast: use_state(|| None::<ToastState>),
        toast_generation: use_memo((), |_| Cell::new(0_u64)),
        overlay_open: use_state(|| false),
        active_card: use_state(|| None::<usize>),
        card_transform: use_state(|| None::<String>),
        gallery_generation: use_memo((), |_| Cell::new(0_u64)),
    }
}

impl AppState {
    /// Whether the lightbox is showing (overlay visible, one card enlarged).
    #[must_use]
    pub fn viewer_open(&self) -> bool {
        *self.overlay_open
    }
}
