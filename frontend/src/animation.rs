use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;

/// Shared flag an effect's cleanup flips to stop a running loop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Resolves on the next `requestAnimationFrame` tick with its timestamp.
pub async fn next_frame() -> Result<f64, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            log::warn!("requestAnimationFrame failed: {:?}", err);
            // settle the promise so the awaiting loop sees the error
            if let Err(err) = reject.call1(&JsValue::NULL, &err) {
                log::debug!("Failed to reject frame promise: {:?}", err);
            }
        }
    });
    let timestamp = JsFuture::from(promise).await?;
    Ok(timestamp.as_f64().unwrap_or_default())
}

/// Runs `frame` once per animation frame until `token` is cancelled.
pub async fn run_frames<F>(token: CancelToken, mut frame: F)
where
    F: FnMut(f64),
{
    while !token.is_cancelled() {
        let timestamp = match next_frame().await {
            Ok(timestamp) => timestamp,
            Err(err) => {
                log::debug!("animation loop stopped: {:?}", err);
                break;
            }
        };
        // cancelled while waiting for the frame
        if token.is_cancelled() {
            break;
        }
        frame(timestamp);
    }
}

/// Collapses bursts of calls into at most one per `delay_ms`. Calls made
/// while a run is pending are dropped.
pub struct Throttle {
    delay_ms: u32,
    slot: PendingSlot<Timeout>,
}

impl Throttle {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            slot: PendingSlot::default(),
        }
    }

    /// Schedules `run` unless a previous call is still waiting. Returns
    /// whether it was scheduled.
    pub fn call<F>(&self, run: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        let delay_ms = self.delay_ms;
        self.slot.schedule(|gate| {
            Timeout::new(delay_ms, move || {
                run();
                gate.release();
            })
        })
    }

    /// Drops any pending run without executing it.
    pub fn cancel(&self) {
        self.slot.cancel();
    }
}

/// Holds at most one scheduled handle. The gate stays closed from
/// `schedule` until the handle's run releases it or `cancel` is called.
struct PendingSlot<H> {
    gate: ThrottleGate,
    handle: RefCell<Option<H>>,
}

impl<H> Default for PendingSlot<H> {
    fn default() -> Self {
        Self {
            gate: ThrottleGate::default(),
            handle: RefCell::new(None),
        }
    }
}

impl<H> PendingSlot<H> {
    fn schedule(&self, start: impl FnOnce(ThrottleGate) -> H) -> bool {
        if !self.gate.try_acquire() {
            return false;
        }
        let handle = start(self.gate.clone());
        // the previous handle already ran, dropping it is a no-op
        self.handle.replace(Some(handle));
        true
    }

    fn cancel(&self) {
        // dropping a Timeout clears it
        drop(self.handle.borrow_mut().take());
        self.gate.release();
    }
}

#[derive(Clone, Debug, Default)]
struct ThrottleGate(Rc<Cell<bool>>);

impl ThrottleGate {
    fn try_acquire(&self) -> bool {
        !self.0.replace(true)
    }

    fn release(&self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let loop_side = token.clone();
        assert!(!loop_side.is_cancelled());
        token.cancel();
        assert!(loop_side.is_cancelled());
    }

    #[test]
    fn test_gate_admits_one_caller_until_released() {
        let gate = ThrottleGate::default();
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());
        assert!(!gate.clone().try_acquire());
        gate.release();
        assert!(gate.try_acquire());
    }

    /// Stands in for a timer: runs on `fire`, records when it is dropped.
    struct FakeTimer {
        gate: ThrottleGate,
        runs: Rc<Cell<u32>>,
        dropped: Rc<Cell<bool>>,
    }

    impl FakeTimer {
        fn fire(&self) {
            self.runs.set(self.runs.get() + 1);
            self.gate.release();
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    fn schedule(
        slot: &PendingSlot<FakeTimer>,
        runs: &Rc<Cell<u32>>,
        dropped: &Rc<Cell<bool>>,
    ) -> bool {
        slot.schedule(|gate| FakeTimer {
            gate,
            runs: runs.clone(),
            dropped: dropped.clone(),
        })
    }

    #[test]
    fn test_slot_drops_calls_until_run_releases() {
        let slot = PendingSlot::default();
        let runs = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));

        assert!(schedule(&slot, &runs, &dropped));
        assert!(!schedule(&slot, &runs, &dropped));
        assert!(!schedule(&slot, &runs, &dropped));

        if let Some(timer) = slot.handle.borrow().as_ref() {
            timer.fire();
        }
        assert_eq!(runs.get(), 1);
        assert!(schedule(&slot, &runs, &dropped));
    }

    #[test]
    fn test_slot_cancel_drops_pending_and_reopens() {
        let slot = PendingSlot::default();
        let runs = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));

        assert!(schedule(&slot, &runs, &dropped));
        slot.cancel();
        assert!(dropped.get());
        assert!(slot.handle.borrow().is_none());
        assert_eq!(runs.get(), 0);

        let fresh = Rc::new(Cell::new(false));
        assert!(schedule(&slot, &runs, &fresh));
        assert!(!fresh.get());
    }

    #[test]
    fn test_slot_cancel_without_pending_is_harmless() {
        let slot: PendingSlot<FakeTimer> = PendingSlot::default();
        slot.cancel();
        assert!(slot.gate.try_acquire());
    }
}
