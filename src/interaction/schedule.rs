use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

/// A one-shot task handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + 'static>;

/// Handle to a pending timer. Cancelling after the timer fired is a no-op.
pub trait TimerHandle {
    fn cancel(&self);
}

/// Source of one-shot timers on the UI event loop.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Runs `task` once after `delay`. Implementations that cannot arm a timer
    /// must run the task right away so nothing waits on it forever.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

/// Scheduler driven by a virtual clock. Nothing fires until [`advance`] is
/// called, which makes timer behavior deterministic.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

pub struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of armed timers that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .pending
            .iter()
            .filter(|p| !p.cancelled.get())
            .count()
    }

    /// Moves the clock forward by `by`, firing due timers in deadline order.
    /// Tasks may schedule further timers; those fire too if they fall inside
    /// the window.
    pub fn advance(&self, by: Duration) {
        let target = self.queue.borrow().now + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                queue.pending.retain(|p| !p.cancelled.get());
                let idx = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let p = queue.pending.swap_remove(i);
                    queue.now = p.due;
                    p
                })
            };
            // the queue borrow is released before running so tasks can reschedule
            match next {
                Some(p) => {
                    p.cancelled.set(true);
                    (p.task)();
                }
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, task: Task) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        let seq = queue.seq;
        queue.seq += 1;
        let due = queue.now + delay;
        queue.pending.push(Pending {
            due,
            seq,
            task,
            cancelled: cancelled.clone(),
        });
        ManualTimer { cancelled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, ms) in [("slow", 300), ("fast", 100), ("mid", 200)] {
            let log = log.clone();
            sched.schedule(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(name)),
            );
        }
        sched.advance(Duration::from_millis(250));
        assert_eq!(*log.borrow(), vec!["fast", "mid"]);
        assert_eq!(sched.pending(), 1);

        sched.advance(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["fast", "mid", "slow"]);
        assert_eq!(sched.now(), Duration::from_millis(300));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let handle = {
            let fired = fired.clone();
            sched.schedule(Duration::from_millis(10), Box::new(move || fired.set(true)))
        };
        handle.cancel();
        sched.advance(Duration::from_secs(1));
        assert!(!fired.get());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_task_can_reschedule() {
        let sched = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        {
            let inner_sched = sched.clone();
            let count = count.clone();
            sched.schedule(
                Duration::from_millis(10),
                Box::new(move || {
                    count.set(count.get() + 1);
                    let count = count.clone();
                    inner_sched.schedule(
                        Duration::from_millis(10),
                        Box::new(move || count.set(count.get() + 1)),
                    );
                }),
            );
        }
        sched.advance(Duration::from_millis(15));
        assert_eq!(count.get(), 1);
        sched.advance(Duration::from_millis(5));
        assert_eq!(count.get(), 2);
    }
}
