use std::fmt::Debug;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Something that reports a vertical scroll offset and can notify a callback
/// when it changes.
pub trait ScrollSource {
    type Subscription;
    type Error: Debug;

    fn scroll_offset(&self) -> f64;
    fn subscribe(&self, on_scroll: Rc<dyn Fn(f64)>) -> Result<Self::Subscription, Self::Error>;
    fn unsubscribe(&self, subscription: &Self::Subscription) -> Result<(), Self::Error>;
}

/// The browser window's `scroll` event.
pub struct WindowScroll {
    window: Window,
}

impl ScrollSource for WindowScroll {
    type Subscription = Closure<dyn Fn()>;
    type Error = JsValue;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn subscribe(&self, on_scroll: Rc<dyn Fn(f64)>) -> Result<Self::Subscription, JsValue> {
        let callback = Closure::<dyn Fn()>::new({
            let window = self.window.clone();
            move || on_scroll(window.scroll_y().unwrap_or(0.0))
        });
        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(callback)
    }

    fn unsubscribe(&self, callback: &Self::Subscription) -> Result<(), JsValue> {
        self.window
            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
    }
}

/// A scroll subscription held for as long as this value lives. Dropping it
/// unsubscribes, including while unwinding, so the callback can never
/// outlive the component that created it.
pub struct ScrollListener<S: ScrollSource = WindowScroll> {
    source: S,
    subscription: S::Subscription,
}

impl ScrollListener<WindowScroll> {
    /// Listens on the browser window. Returns `None` outside a browser or
    /// when registration fails.
    pub fn attach<F>(on_scroll: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        let window = web_sys::window()?;
        Self::attach_to(WindowScroll { window }, on_scroll)
    }
}

impl<S: ScrollSource> ScrollListener<S> {
    /// Reports the current offset once right away, so a page restored
    /// mid-scroll starts in the right state, then subscribes.
    pub fn attach_to<F>(source: S, on_scroll: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        let on_scroll: Rc<dyn Fn(f64)> = Rc::new(on_scroll);
        on_scroll(source.scroll_offset());

        match source.subscribe(on_scroll) {
            Ok(subscription) => {
                debug!("Scroll listener attached");
                Some(Self { source, subscription })
            }
            Err(err) => {
                warn!("Failed to attach scroll listener: {:?}", err);
                None
            }
        }
    }
}

impl<S: ScrollSource> Drop for ScrollListener<S> {
    fn drop(&mut self) {
        match self.source.unsubscribe(&self.subscription) {
            Ok(()) => debug!("Scroll listener detached"),
            Err(err) => warn!("Failed to detach scroll listener: {:?}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{self, AssertUnwindSafe};

    use crate::view_state::ViewState;

    type Slots = Rc<RefCell<Vec<Option<Rc<dyn Fn(f64)>>>>>;

    /// In-memory host that records subscriptions and can fire scroll events.
    #[derive(Clone, Default)]
    struct FakeScroll {
        offset: Rc<Cell<f64>>,
        slots: Slots,
        refuse: bool,
    }

    impl FakeScroll {
        fn active(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }

        fn scroll_to(&self, y: f64) {
            self.offset.set(y);
            let live: Vec<_> = self.slots.borrow().iter().flatten().cloned().collect();
            for callback in live {
                callback(y);
            }
        }
    }

    impl ScrollSource for FakeScroll {
        type Subscription = usize;
        type Error = &'static str;

        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn subscribe(&self, on_scroll: Rc<dyn Fn(f64)>) -> Result<usize, &'static str> {
            if self.refuse {
                return Err("refused");
            }
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(on_scroll));
            Ok(slots.len() - 1)
        }

        fn unsubscribe(&self, slot: &usize) -> Result<(), &'static str> {
            self.slots.borrow_mut()[*slot].take().map(|_| ()).ok_or("not subscribed")
        }
    }

    fn counting() -> (Rc<Cell<usize>>, impl Fn(f64) + 'static) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        (count, move |_| seen.set(seen.get() + 1))
    }

    #[test]
    fn samples_once_on_attach_then_follows_events() {
        let host = FakeScroll::default();
        let (count, on_scroll) = counting();

        let listener = ScrollListener::attach_to(host.clone(), on_scroll);
        assert!(listener.is_some());
        assert_eq!(count.get(), 1);
        assert_eq!(host.active(), 1);

        host.scroll_to(40.0);
        host.scroll_to(80.0);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let host = FakeScroll::default();
        let (count, on_scroll) = counting();

        let listener = ScrollListener::attach_to(host.clone(), on_scroll);
        host.scroll_to(10.0);
        assert_eq!(count.get(), 2);

        drop(listener);
        assert_eq!(host.active(), 0);

        host.scroll_to(50.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unsubscribes_when_unwinding() {
        let host = FakeScroll::default();
        let guarded = host.clone();

        let result = panic::catch_unwind(AssertUnwindSafe(move || {
            let _listener = ScrollListener::attach_to(guarded, |_| {});
            panic!("view torn down");
        }));

        assert!(result.is_err());
        assert_eq!(host.active(), 0);
    }

    #[test]
    fn remount_keeps_a_single_subscription() {
        let host = FakeScroll::default();

        let first = ScrollListener::attach_to(host.clone(), |_| {});
        drop(first);
        let _second = ScrollListener::attach_to(host.clone(), |_| {});

        assert_eq!(host.active(), 1);
        assert_eq!(host.slots.borrow().len(), 2);
    }

    #[test]
    fn refused_subscription_yields_no_listener() {
        let host = FakeScroll { refuse: true, ..FakeScroll::default() };
        let (count, on_scroll) = counting();

        assert!(ScrollListener::attach_to(host.clone(), on_scroll).is_none());
        assert_eq!(host.active(), 0);
        // The initial sample still ran
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drives_the_scrolled_flag() {
        let host = FakeScroll::default();
        host.offset.set(100.0);

        let state = Rc::new(RefCell::new(ViewState::new()));
        let _listener = ScrollListener::attach_to(host.clone(), {
            let state = Rc::clone(&state);
            move |y| state.borrow_mut().on_scroll(y)
        });
        assert!(state.borrow().is_scrolled);

        host.scroll_to(20.0);
        assert!(!state.borrow().is_scrolled);
        host.scroll_to(21.0);
        assert!(state.borrow().is_scrolled);
    }
}
