//! Browser side of the interaction ports, plus the few imperative DOM calls
//! the page makes (scrolling, downloads, new tabs, theme class).

use std::{cell::RefCell, rc::Rc, time::Duration};

use js_sys::{Function, Promise, Reflect};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    content::{scroll_offset, HEADER_HEIGHT},
    interaction::{CapabilityProbe, Clipboard, ClipboardError, Scheduler, Task, TimerHandle},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub struct BrowserTimer(Option<TimeoutHandle>);

impl TimerHandle for BrowserTimer {
    fn cancel(&self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&self, delay: Duration, task: Task) -> BrowserTimer {
        let slot = Rc::new(RefCell::new(Some(task)));
        let armed = slot.clone();
        let res = set_timeout_with_handle(
            move || {
                let task = armed.borrow_mut().take();
                if let Some(task) = task {
                    task();
                }
            },
            delay,
        );
        match res {
            Ok(handle) => BrowserTimer(Some(handle)),
            Err(err) => {
                log::error!("Couldn't arm timer, running task now: {err:?}");
                let task = slot.borrow_mut().take();
                if let Some(task) = task {
                    task();
                }
                BrowserTimer(None)
            }
        }
    }
}

fn js_error(err: JsValue) -> ClipboardError {
    ClipboardError::WriteFailed(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

/// `navigator.clipboard`. Looked up at call time since it is missing on
/// insecure origins.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let navigator = window().navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::WriteFailed(
                "clipboard unavailable".to_string(),
            ));
        }
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(js_error)?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(js_error)?
            .dyn_into::<Promise>()
            .map_err(js_error)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
    }
}

pub struct BrowserProbe;

impl CapabilityProbe for BrowserProbe {
    fn viewport_width(&self) -> f64 {
        window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default()
    }

    fn touch_signal(&self) -> bool {
        Reflect::has(&window(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }
}

pub fn scroll_to_section(id: &str) {
    let el = match document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(el) => el,
        None => {
            log::warn!("no section with id {id}");
            return;
        }
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_offset(el.offset_top() as f64, HEADER_HEIGHT));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Saves `path` as `filename` through a throwaway `<a download>`.
pub fn trigger_download(path: &str, filename: &str) {
    let document = document();
    let link = match document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    {
        Some(link) => link,
        None => return,
    };
    let body = match document.body() {
        Some(body) => body,
        None => return,
    };
    link.set_href(path);
    link.set_download(filename);
    if body.append_child(&link).is_ok() {
        link.click();
        let _ = body.remove_child(&link);
    }
    log::debug!("download triggered for {path}");
}

pub fn open_in_new_tab(href: &str) {
    if let Err(err) = window().open_with_url_and_target(href, "_blank") {
        log::error!("Failed to open {href}: {err:?}");
    }
}

pub fn apply_dark_class(dark: bool) {
    if let Some(root) = document().document_element() {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}
