#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootPhase {
    Content,
    Mount,
}

impl BootPhase {
    fn label(self) -> &'static str {
        match self {
            BootPhase::Content => "content",
            BootPhase::Mount => "mount",
        }
    }
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
fn loader() -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("__PF_BOOT")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<js_sys::Object>().ok()
}

#[cfg(target_arch = "wasm32")]
fn call(method: &str, args: &[JsValue]) {
    let Some(loader) = loader() else {
        return;
    };
    let Ok(value) = Reflect::get(&loader, &JsValue::from_str(method)) else {
        return;
    };
    let Ok(func) = value.dyn_into::<Function>() else {
        return;
    };
    let array = js_sys::Array::new();
    for arg in args {
        array.push(arg);
    }
    let _ = func.apply(&loader, &array);
}

pub(crate) fn set_phase(phase: BootPhase, detail: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        call(
            "setPhase",
            &[JsValue::from_str(phase.label()), JsValue::from_str(detail)],
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (phase.label(), detail);
    }
}

pub(crate) fn fail(code: &str, message: &str) {
    gloo::console::warn!("boot failed", code, message);
    #[cfg(target_arch = "wasm32")]
    {
        call("fail", &[JsValue::from_str(code), JsValue::from_str(message)]);
    }
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        if READY_SENT.with(|flag| flag.replace(true)) {
            return;
        }
        call("ready", &[]);
    }
}
