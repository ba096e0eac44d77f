//! Trailing-edge debouncer for search inputs.

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Source of one-shot timers.
pub trait TimerDriver {
    type Handle;

    fn start(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn stop(&self, handle: Self::Handle);
}

/// `setTimeout` through gloo-timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl TimerDriver for BrowserTimer {
    type Handle = Timeout;

    fn start(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }

    fn stop(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}

/// Runs `callback` once the caller has stopped calling [`Debouncer::schedule`]
/// for `delay`, with the arguments of the last call.
///
/// Dropping the debouncer cancels a pending call.
pub struct Debouncer<A, D: TimerDriver = BrowserTimer> {
    driver: D,
    delay: Duration,
    callback: Rc<dyn Fn(A)>,
    generation: Cell<u64>,
    armed: Rc<Cell<Option<u64>>>,
    handle: RefCell<Option<D::Handle>>,
}

impl<A: 'static> Debouncer<A, BrowserTimer> {
    pub fn browser(delay: Duration, callback: impl Fn(A) + 'static) -> Self {
        Self::new(BrowserTimer, delay, callback)
    }
}

impl<A: 'static, D: TimerDriver> Debouncer<A, D> {
    pub fn new(driver: D, delay: Duration, callback: impl Fn(A) + 'static) -> Self {
        Self {
            driver,
            delay,
            callback: Rc::new(callback),
            generation: Cell::new(0),
            armed: Rc::new(Cell::new(None)),
            handle: RefCell::new(None),
        }
    }

    /// Restarts the quiet window with `args`.
    pub fn schedule(&self, args: A) {
        self.stop_timer();

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.armed.set(Some(generation));

        let armed = Rc::clone(&self.armed);
        let callback = Rc::clone(&self.callback);
        let handle = self.driver.start(
            self.delay,
            Box::new(move || {
                if armed.get() == Some(generation) {
                    armed.set(None);
                    callback(args);
                }
            }),
        );
        *self.handle.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        self.armed.set(None);
        self.stop_timer();
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get().is_some()
    }

    fn stop_timer(&self) {
        let handle = self.handle.borrow_mut().take();
        if let Some(handle) = handle {
            self.driver.stop(handle);
        }
    }
}

impl<A, D: TimerDriver> Drop for Debouncer<A, D> {
    fn drop(&mut self) {
        self.armed.set(None);
        if let Some(handle) = self.handle.get_mut().take() {
            self.driver.stop(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Task = (u64, Duration, Box<dyn FnOnce()>);

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Virtual clock; tasks only run inside [`ManualTimer::advance`].
    #[derive(Clone, Default)]
    struct ManualTimer(Rc<RefCell<Clock>>);

    impl ManualTimer {
        fn advance(&self, by: Duration) {
            let target = self.0.borrow().now + by;
            loop {
                let due = {
                    let mut clock = self.0.borrow_mut();
                    let next = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, at, _))| *at <= target)
                        .min_by_key(|(_, (_, at, _))| *at)
                        .map(|(i, _)| i);
                    next.map(|i| {
                        let (_, at, task) = clock.tasks.remove(i);
                        clock.now = at;
                        task
                    })
                };
                match due {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.0.borrow_mut().now = target;
        }

        fn scheduled(&self) -> usize {
            self.0.borrow().tasks.len()
        }
    }

    impl TimerDriver for ManualTimer {
        type Handle = u64;

        fn start(&self, delay: Duration, task: Box<dyn FnOnce()>) -> u64 {
            let mut clock = self.0.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let at = clock.now + delay;
            clock.tasks.push((id, at, task));
            id
        }

        fn stop(&self, handle: u64) {
            self.0.borrow_mut().tasks.retain(|(id, _, _)| *id != handle);
        }
    }

    const WINDOW: Duration = Duration::from_millis(500);

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |s: String| sink.borrow_mut().push(s))
    }

    #[test]
    fn test_burst_collapses_into_last_call() {
        let timer = ManualTimer::default();
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(timer.clone(), WINDOW, callback);

        for text in ["s", "sh", "shi", "shir", "shirt"] {
            debouncer.schedule(text.to_string());
            timer.advance(Duration::from_millis(100));
        }
        assert!(debouncer.is_pending());
        assert!(calls.borrow().is_empty());
        assert_eq!(timer.scheduled(), 1);

        timer.advance(WINDOW);
        assert_eq!(*calls.borrow(), vec!["shirt".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_quiet_window_restarts_on_each_call() {
        let timer = ManualTimer::default();
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(timer.clone(), WINDOW, callback);

        debouncer.schedule("a".into());
        timer.advance(Duration::from_millis(400));
        debouncer.schedule("ab".into());
        timer.advance(Duration::from_millis(400));
        assert!(calls.borrow().is_empty());
        timer.advance(Duration::from_millis(100));
        assert_eq!(*calls.borrow(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let timer = ManualTimer::default();
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(timer.clone(), WINDOW, callback);

        debouncer.schedule("a".into());
        timer.advance(WINDOW);
        debouncer.schedule("b".into());
        timer.advance(WINDOW);
        assert_eq!(*calls.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let timer = ManualTimer::default();
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(timer.clone(), WINDOW, callback);

        debouncer.schedule("a".into());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(timer.scheduled(), 0);
        timer.advance(WINDOW * 2);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_drop_cancels() {
        let timer = ManualTimer::default();
        let (calls, callback) = recorder();
        {
            let debouncer = Debouncer::new(timer.clone(), WINDOW, callback);
            debouncer.schedule("a".into());
        }
        assert_eq!(timer.scheduled(), 0);
        timer.advance(WINDOW);
        assert!(calls.borrow().is_empty());
    }
}
