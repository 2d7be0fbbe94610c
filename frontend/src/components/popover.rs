use leptos::{ev, html, *};
use wasm_bindgen::JsCast;

/// Calls `on_close` when a pointer goes down outside `target`. The window
/// listener only exists while `open` is true.
pub fn use_click_outside(target: NodeRef<html::Div>, open: Signal<bool>, on_close: Callback<()>) {
    let handle = store_value(None::<leptos_dom::helpers::WindowListenerHandle>);

    create_effect(move |_| {
        let is_open = open.get();
        handle.update_value(|slot| {
            if let Some(listener) = slot.take() {
                listener.remove();
            }
        });
        if !is_open {
            return;
        }
        let listener = window_event_listener(ev::pointerdown, move |event| {
            let Some(container) = target.get_untracked() else {
                return;
            };
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|node| container.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                on_close.call(());
            }
        });
        handle.set_value(Some(listener));
    });

    on_cleanup(move || {
        handle.update_value(|slot| {
            if let Some(listener) = slot.take() {
                listener.remove();
            }
        });
    });
}
