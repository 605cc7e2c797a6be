use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
    time::Duration,
};

use super::schedule::{Scheduler, TimerHandle};

/// How long the "copied" acknowledgment stays up after a successful copy.
pub const COPY_ACK: Duration = Duration::from_millis(2000);
/// Length of the press pulse on buttons and contact links.
pub const PRESS_PULSE: Duration = Duration::from_millis(300);

pub const COPY_EMAIL: &str = "copy-email";
pub const SEND_EMAIL: &str = "send-email";
pub const DOWNLOAD_RESUME: &str = "download-resume";

struct Activation<H> {
    token: u64,
    // None until the scheduler hands the handle back
    timer: Option<H>,
}

struct State<H> {
    active: HashMap<String, Activation<H>>,
    next_token: u64,
    disposed: bool,
}

impl<H: TimerHandle> State<H> {
    fn cancel_all(&mut self) {
        for (_, activation) in self.active.drain() {
            if let Some(timer) = activation.timer {
                timer.cancel();
            }
        }
    }
}

struct Shared<S: Scheduler> {
    scheduler: S,
    state: RefCell<State<S::Handle>>,
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

impl<S: Scheduler> Drop for Shared<S> {
    fn drop(&mut self) {
        self.state.get_mut().cancel_all();
    }
}

impl<S: Scheduler> Shared<S> {
    fn notify(&self) {
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }

    fn expire(&self, id: &str, token: u64) {
        let removed = {
            let mut state = self.state.borrow_mut();
            let current = state.active.get(id).is_some_and(|a| a.token == token);
            if current {
                state.active.remove(id);
            }
            current
        };
        if removed {
            log::debug!("transient flag {id} expired");
            self.notify();
        }
    }
}

/// Set of interaction ids that are briefly "active" after a user action.
///
/// Each [`activate`] arms exactly one timer for its id; re-activating an id
/// that is still active does nothing. Timers are cancelled on [`deactivate`],
/// [`dispose`] and when the last clone is dropped.
///
/// [`activate`]: TransientFlags::activate
/// [`deactivate`]: TransientFlags::deactivate
/// [`dispose`]: TransientFlags::dispose
pub struct TransientFlags<S: Scheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler> Clone for TransientFlags<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S: Scheduler + 'static> TransientFlags<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                state: RefCell::new(State {
                    active: HashMap::new(),
                    next_token: 0,
                    disposed: false,
                }),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers a callback run after every membership change.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.shared.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn activate(&self, id: impl Into<String>, duration: Duration) {
        let id = id.into();
        let token = {
            let mut state = self.shared.state.borrow_mut();
            if state.disposed || state.active.contains_key(&id) {
                return;
            }
            let token = state.next_token;
            state.next_token += 1;
            state
                .active
                .insert(id.clone(), Activation { token, timer: None });
            token
        };
        self.shared.notify();

        let weak: Weak<Shared<S>> = Rc::downgrade(&self.shared);
        let expired_id = id.clone();
        let timer = self.shared.scheduler.schedule(
            duration,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.expire(&expired_id, token);
                }
            }),
        );

        let mut state = self.shared.state.borrow_mut();
        match state.active.get_mut(&id) {
            Some(activation) if activation.token == token => activation.timer = Some(timer),
            // already expired, the scheduler ran the task inline
            _ => timer.cancel(),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.shared.state.borrow().active.contains_key(id)
    }

    pub fn deactivate(&self, id: &str) {
        let removed = self.shared.state.borrow_mut().active.remove(id);
        if let Some(activation) = removed {
            if let Some(timer) = activation.timer {
                timer.cancel();
            }
            self.shared.notify();
        }
    }

    /// Currently active ids, sorted.
    pub fn active_ids(&self) -> Vec<String> {
        let mut ids = self
            .shared
            .state
            .borrow()
            .active
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    /// Cancels all pending timers and ignores any later activation. Called
    /// when the owning component unmounts; listeners are not notified.
    pub fn dispose(&self) {
        let mut state = self.shared.state.borrow_mut();
        state.disposed = true;
        state.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::interaction::schedule::{ManualScheduler, Task};

    fn setup() -> (ManualScheduler, TransientFlags<ManualScheduler>) {
        let sched = ManualScheduler::new();
        let flags = TransientFlags::new(sched.clone());
        (sched, flags)
    }

    #[test]
    fn test_activate_expires_after_duration() {
        let (sched, flags) = setup();
        flags.activate(COPY_EMAIL, COPY_ACK);
        assert!(flags.is_active(COPY_EMAIL));

        sched.advance(Duration::from_millis(1999));
        assert!(flags.is_active(COPY_EMAIL));

        sched.advance(Duration::from_millis(1));
        assert!(!flags.is_active(COPY_EMAIL));
    }

    #[test]
    fn test_ids_are_independent() {
        let (sched, flags) = setup();
        flags.activate(COPY_EMAIL, COPY_ACK);
        flags.activate("LinkedIn", PRESS_PULSE);
        assert_eq!(flags.active_ids(), vec!["LinkedIn", COPY_EMAIL]);

        sched.advance(PRESS_PULSE);
        assert!(!flags.is_active("LinkedIn"));
        assert!(flags.is_active(COPY_EMAIL));

        sched.advance(COPY_ACK);
        assert!(flags.active_ids().is_empty());
    }

    #[test]
    fn test_repeat_activation_keeps_single_timer() {
        let (sched, flags) = setup();
        flags.activate(SEND_EMAIL, PRESS_PULSE);
        sched.advance(Duration::from_millis(200));
        flags.activate(SEND_EMAIL, PRESS_PULSE);
        assert_eq!(sched.pending(), 1);

        // the first timer is kept, so removal happens at 300ms from the first call
        sched.advance(Duration::from_millis(100));
        assert!(!flags.is_active(SEND_EMAIL));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_stale_timer_does_not_clear_new_activation() {
        let (sched, flags) = setup();
        flags.activate(DOWNLOAD_RESUME, PRESS_PULSE);
        flags.deactivate(DOWNLOAD_RESUME);
        assert!(!flags.is_active(DOWNLOAD_RESUME));
        assert_eq!(sched.pending(), 0);

        sched.advance(Duration::from_millis(100));
        flags.activate(DOWNLOAD_RESUME, PRESS_PULSE);
        sched.advance(Duration::from_millis(250));
        assert!(flags.is_active(DOWNLOAD_RESUME));
        sched.advance(Duration::from_millis(50));
        assert!(!flags.is_active(DOWNLOAD_RESUME));
    }

    #[test]
    fn test_deactivate_unknown_id_is_noop() {
        let (_sched, flags) = setup();
        let changes = Rc::new(Cell::new(0));
        {
            let changes = changes.clone();
            flags.subscribe(move || changes.set(changes.get() + 1));
        }
        flags.deactivate("nothing");
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_listeners_see_each_change() {
        let (sched, flags) = setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let observed = flags.clone();
            flags.subscribe(move || seen.borrow_mut().push(observed.is_active(COPY_EMAIL)));
        }
        flags.activate(COPY_EMAIL, COPY_ACK);
        flags.activate(COPY_EMAIL, COPY_ACK);
        sched.advance(COPY_ACK);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_dispose_cancels_timers() {
        let (sched, flags) = setup();
        flags.activate(COPY_EMAIL, COPY_ACK);
        flags.activate(SEND_EMAIL, PRESS_PULSE);
        flags.dispose();
        assert_eq!(sched.pending(), 0);
        assert!(flags.active_ids().is_empty());

        flags.activate(COPY_EMAIL, COPY_ACK);
        assert!(!flags.is_active(COPY_EMAIL));
    }

    #[test]
    fn test_drop_cancels_timers() {
        let (sched, flags) = setup();
        flags.activate(COPY_EMAIL, COPY_ACK);
        drop(flags);
        assert_eq!(sched.pending(), 0);
        sched.advance(COPY_ACK);
    }

    struct InlineScheduler;

    struct NoTimer;

    impl TimerHandle for NoTimer {
        fn cancel(&self) {}
    }

    impl Scheduler for InlineScheduler {
        type Handle = NoTimer;

        fn schedule(&self, _delay: Duration, task: Task) -> NoTimer {
            task();
            NoTimer
        }
    }

    #[test]
    fn test_inline_scheduler_never_leaves_flag_stuck() {
        let flags = TransientFlags::new(InlineScheduler);
        flags.activate(COPY_EMAIL, COPY_ACK);
        assert!(!flags.is_active(COPY_EMAIL));
    }
}
