//! Leptos Subscription Utilities
//!
//! Browser subscriptions scoped to the component that creates them.
//! Every helper subscribes when called inside a component and tears the
//! subscription down when that component's owner is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Run `on_tick` every `period_ms` while `active` is true.
///
/// The interval is created when `active` becomes true and dropped (which
/// cancels it) when `active` becomes false. It lives inside the effect, so
/// it is also dropped when the effect is disposed on unmount.
pub fn use_interval<F>(active: Signal<bool>, period_ms: u32, on_tick: F)
where
    F: Fn() + Clone + 'static,
{
    let handle = Rc::new(RefCell::new(None::<Interval>));

    Effect::new(move |_| {
        let running = active.get();
        let mut slot = handle.borrow_mut();

        if !running {
            if slot.take().is_some() {
                log::debug!("[interval] stopped ({period_ms}ms)");
            }
            return;
        }
        if slot.is_some() {
            return;
        }

        let on_tick = on_tick.clone();
        *slot = Some(Interval::new(period_ms, move || on_tick()));
        log::debug!("[interval] started ({period_ms}ms)");
    });
}

/// Current `window.innerWidth` in CSS pixels, `0.0` outside a browser window.
pub fn window_inner_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Track the window width through a `resize` listener.
///
/// The listener is removed when the calling component unmounts.
pub fn use_window_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(window_inner_width());

    let listener = window_event_listener(leptos::ev::resize, move |_| {
        set_width.set(window_inner_width());
    });
    log::debug!("[resize] listener attached");

    on_cleanup(move || {
        listener.remove();
        log::debug!("[resize] listener removed");
    });

    width
}
