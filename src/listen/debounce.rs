use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to a trailing-edge debounced callback created by [`debounce`].
///
/// Dropping the handle flushes a pending trailing call, then stops the
/// worker.
pub struct Debounced<T> {
    tx: Option<Sender<T>>,
    worker: Option<JoinHandle<()>>,
}

/// Debounce a callback: bursts of [`call`](Debounced::call) within
/// `window` collapse to a single invocation of `f` with the last value,
/// fired once the window elapses with no further calls.
///
/// Used to coalesce rapid host push-events before they reach a store.
///
/// # Examples
///
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use mural::listen::debounce;
///
/// let (tx, rx) = mpsc::channel();
/// let debounced = debounce(move |n: u32| tx.send(n).unwrap(), Duration::from_millis(20));
///
/// debounced.call(1);
/// debounced.call(2);
/// debounced.call(3);
/// drop(debounced); // flushes the trailing call
///
/// assert_eq!(rx.recv().unwrap(), 3);
/// assert!(rx.recv().is_err());
/// ```
pub fn debounce<T, F>(f: F, window: Duration) -> Debounced<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    let worker = thread::spawn(move || {
        while let Ok(first) = rx.recv() {
            let mut pending = first;
            loop {
                match rx.recv_timeout(window) {
                    // A newer value within the window supersedes the
                    // pending one and restarts the window.
                    Ok(next) => pending = next,
                    Err(RecvTimeoutError::Timeout) => {
                        f(pending);
                        break;
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        f(pending);
                        return;
                    }
                }
            }
        }
    });
    Debounced {
        tx: Some(tx),
        worker: Some(worker),
    }
}

impl<T> Debounced<T> {
    /// Schedule an invocation with `value`, superseding any value still
    /// waiting out the window.
    pub fn call(&self, value: T) {
        if let Some(tx) = &self.tx {
            // The worker only exits once the channel disconnects, so this
            // cannot fail while the handle is alive.
            let _ = tx.send(value);
        }
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        // Disconnect the channel so the worker flushes and exits.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
