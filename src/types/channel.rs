//! A stream of values produced on a background thread.
//!
//! [`Chan::from_iterator`] moves an iterator onto a dedicated producer thread,
//! which hands its values over one at a time through a bounded conduit of
//! capacity 1. The consumer side is itself a [`LazyIterator`] whose `next`
//! blocks until a value arrives or the producer has finished.
//!
//! The hand-off is buffered, not a rendezvous: the producer runs ahead of the
//! consumer by up to two values, one parked in the buffer and one waiting to
//! be sent.
//!
//! The producer stops as soon as the [`Chan`] is dropped, so abandoning a
//! channel over an infinite iterator does not leak a blocked thread.
//!
//! Receiving blocks the calling thread. Do not consume a channel from inside
//! an async runtime's worker thread.
//!
//! # Examples
//!
//! ```rust
//! use dogs::algebra::derive_additive_monoid;
//! use dogs::iterator::range;
//! use dogs::types::channel::{self, Chan};
//!
//! let chan = Chan::from_iterator(range(1, 100));
//! assert_eq!(channel::sum(derive_additive_monoid::<i32>(), chan), 5050);
//! ```

use std::fmt;
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

use crate::collection::IntoLazyIterator;
use crate::iterator::LazyIterator;

const CAPACITY: usize = 1;

/// The receiving end of a producer thread's values.
pub struct Chan<T> {
    receiver: mpsc::Receiver<T>,
}

static_assertions::assert_impl_all!(Chan<i32>: Send);

impl<T: Send + 'static> Chan<T> {
    /// Spawns a producer thread that drains `iter` into a new channel.
    ///
    /// # Panics
    ///
    /// Panics if the operating system fails to spawn a thread.
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(CAPACITY);
        let mut source = iter.into_lazy_iter();
        thread::spawn(move || {
            debug!("channel producer started");
            let mut sent: usize = 0;
            while let Some(element) = source.next() {
                if sender.blocking_send(element).is_err() {
                    debug!(sent, "channel consumer dropped, producer stopping");
                    return;
                }
                sent += 1;
            }
            debug!(sent, "channel producer exhausted, closing");
        });
        Self { receiver }
    }
}

impl<T> Chan<T> {
    /// Iterates over the values still to be received.
    ///
    /// # Panics
    ///
    /// `next` panics when called from within an asynchronous execution
    /// context.
    pub fn iter(&mut self) -> Iter<'_, T> {
        Iter {
            receiver: &mut self.receiver,
        }
    }
}

impl<T> fmt::Debug for Chan<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Chan")
            .field("closed", &self.receiver.is_closed())
            .finish_non_exhaustive()
    }
}

/// Borrowing iterator over a [`Chan`]. Created by [`Chan::iter`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    receiver: &'a mut mpsc::Receiver<T>,
}

impl<T> LazyIterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.blocking_recv()
    }
}

/// Owning iterator over a [`Chan`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    receiver: mpsc::Receiver<T>,
}

impl<T> LazyIterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.blocking_recv()
    }
}

impl<T> IntoLazyIterator for Chan<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_lazy_iter(self) -> IntoIter<T> {
        IntoIter {
            receiver: self.receiver,
        }
    }
}

crate::fold_functions!(Chan);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{empty, range};
    use rstest::rstest;

    #[rstest]
    fn delivers_values_in_order() {
        let chan = Chan::from_iterator(vec!["a", "b", "c"]);
        assert_eq!(chan.into_lazy_iter().to_vec(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn empty_source_closes_immediately() {
        let mut chan = Chan::from_iterator(empty::<u8>());
        assert_eq!(chan.iter().next(), None);
        assert_eq!(chan.iter().next(), None);
    }

    #[rstest]
    fn partial_reads_resume_where_they_stopped() {
        let mut chan = Chan::from_iterator(range(1, 5));
        assert_eq!(chan.iter().take(2).to_vec(), vec![1, 2]);
        assert_eq!(find_index(chan, |x| *x == 5), Some(2));
    }

    #[rstest]
    fn producer_runs_at_most_two_values_ahead() {
        use crate::iterator::unfold;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::time::{Duration, Instant};

        let pulls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulls);
        let mut chan = Chan::from_iterator(unfold(0_u64, move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some((n + 1, n))
        }));
        assert_eq!(chan.iter().next(), Some(0));

        let deadline = Instant::now() + Duration::from_secs(5);
        while pulls.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        thread::sleep(Duration::from_millis(50));
        assert_eq!(pulls.load(Ordering::SeqCst), 3);
    }
}
