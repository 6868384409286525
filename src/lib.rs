//! condq - Mutex/Condvar-based bounded buffer for one producer and one consumer
//!
//! A fixed-capacity integer buffer where both sides block: `put` suspends the
//! producer while the buffer is flagged full, `take` suspends the consumer
//! while it is flagged empty. One lock guards the sequence and both flags as a
//! single unit; waiters re-check their flag in a loop after every wakeup and
//! every signal is a broadcast (`notify_all`).
//!
//! The buffer keeps its own counter: the producer never supplies a value.
//! `put` appends 0 into an empty buffer and otherwise appends the current
//! tail plus one. `take` removes from the tail as well, so the buffer drains
//! in LIFO order. Both operations report what they did through the [`log`]
//! facade; install a logger (the bundled `condq` binary does) to see the
//! console trace.
#![warn(missing_docs)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info};

#[cfg(loom)]
use loom::sync::{Condvar, Mutex};
#[cfg(not(loom))]
use std::sync::{Condvar, Mutex};

/// Capacity of a buffer built with [`BoundedBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Pause between production attempts in a [`Producer`] built with `new`.
pub const PRODUCE_INTERVAL: Duration = Duration::from_millis(500);

/// Pause between consumption attempts in a [`Consumer`] built with `new`.
/// Deliberately slower than [`PRODUCE_INTERVAL`], so the buffer tends to fill.
pub const CONSUME_INTERVAL: Duration = Duration::from_millis(1000);

struct State {
    items: Vec<i32>,
    full: bool,
    empty: bool,
}

/// Fixed-capacity buffer shared by exactly one producer and one consumer.
///
/// The `full` and `empty` flags are cached state, not recomputed length
/// checks: a flag is raised only by the operation that runs into the
/// corresponding boundary, and it is that flag (not the length) the other
/// side waits on. The observable consequence is that the first `take` on a
/// fresh buffer, and the first `put` against a just-filled one, return
/// `None` without blocking; the *next* such call is the one that suspends.
pub struct BoundedBuffer {
    state: Mutex<State>,
    cond: Condvar,
    capacity: usize,
}

impl BoundedBuffer {
    /// Creates a buffer with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a buffer holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        BoundedBuffer {
            state: Mutex::new(State {
                items: Vec::with_capacity(capacity),
                full: false,
                empty: false,
            }),
            cond: Condvar::new(),
            capacity,
        }
    }

    /// Appends the next derived value, blocking while the buffer is flagged
    /// full.
    ///
    /// The value is 0 into an empty buffer, otherwise the current tail plus
    /// one. Returns the appended value. A call that finds the buffer at
    /// capacity (with the flag not yet raised) burns the attempt: it raises
    /// `full`, appends nothing and returns `None`, and the following call is
    /// the one that blocks.
    pub fn put(&self) -> Option<i32> {
        let mut state = self.state.lock().unwrap();
        while state.full {
            debug!("buffer full, producer waiting");
            state = self.cond.wait(state).unwrap();
        }

        let appended = if state.items.is_empty() {
            info!("Producer Initial Item: 0");
            state.items.push(0);
            Some(0)
        } else if state.items.len() < self.capacity {
            let current = state.items[state.items.len() - 1];
            let next = current + 1;
            state.items.push(next);
            info!("Producer Current Item: {} Producer Next Item: {}", current, next);
            Some(next)
        } else {
            debug!("put against a buffer at capacity, raising full flag");
            state.full = true;
            None
        };
        state.empty = false;

        self.cond.notify_all();
        appended
    }

    /// Removes and returns the tail value, blocking while the buffer is
    /// flagged empty.
    ///
    /// Removal is from the tail, so items come back in LIFO order. A call
    /// that finds nothing to remove (with the flag not yet raised) raises
    /// `empty` and returns `None`; the following call is the one that blocks.
    pub fn take(&self) -> Option<i32> {
        let mut state = self.state.lock().unwrap();
        while state.empty {
            debug!("buffer empty, consumer waiting");
            state = self.cond.wait(state).unwrap();
        }

        let removed = match state.items.pop() {
            Some(item) => {
                info!("Consumer: Removed Item: {}", item);
                state.full = false;
                Some(item)
            }
            None => {
                debug!("take against an empty buffer, raising empty flag");
                state.empty = true;
                None
            }
        };

        self.cond.notify_all();
        removed
    }

    /// Maximum number of items the buffer holds.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently buffered.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    /// Whether the `full` flag is currently raised.
    ///
    /// This reports the cached flag the producer waits on, which lags the
    /// length: a buffer at capacity reads as not full until a `put` has run
    /// into it.
    pub fn is_full(&self) -> bool {
        self.state.lock().unwrap().full
    }

    /// Whether the `empty` flag is currently raised.
    ///
    /// Like [`is_full`](Self::is_full), this is the cached flag, raised only
    /// once a `take` has come up empty.
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().empty
    }
}

impl Default for BoundedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The producing side: sleeps, then calls [`BoundedBuffer::put`], forever.
pub struct Producer {
    buffer: Arc<BoundedBuffer>,
    interval: Duration,
}

impl Producer {
    /// Binds a producer to `buffer` at the standard [`PRODUCE_INTERVAL`].
    pub fn new(buffer: Arc<BoundedBuffer>) -> Self {
        Self::with_interval(buffer, PRODUCE_INTERVAL)
    }

    /// Binds a producer that pauses `interval` between attempts.
    pub fn with_interval(buffer: Arc<BoundedBuffer>, interval: Duration) -> Self {
        Producer { buffer, interval }
    }

    /// Starts the loop on its own thread. The loop never terminates, so the
    /// returned handle never resolves; joining it parks the caller for good.
    pub fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            info!("Starting Producer Thread");
            loop {
                thread::sleep(self.interval);
                self.buffer.put();
            }
        })
    }
}

/// The consuming side: sleeps, then calls [`BoundedBuffer::take`], forever.
pub struct Consumer {
    buffer: Arc<BoundedBuffer>,
    interval: Duration,
}

impl Consumer {
    /// Binds a consumer to `buffer` at the standard [`CONSUME_INTERVAL`].
    pub fn new(buffer: Arc<BoundedBuffer>) -> Self {
        Self::with_interval(buffer, CONSUME_INTERVAL)
    }

    /// Binds a consumer that pauses `interval` between attempts.
    pub fn with_interval(buffer: Arc<BoundedBuffer>, interval: Duration) -> Self {
        Consumer { buffer, interval }
    }

    /// Starts the loop on its own thread; see [`Producer::spawn`].
    pub fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            info!("Starting Consumer Thread");
            loop {
                thread::sleep(self.interval);
                self.buffer.take();
            }
        })
    }
}
