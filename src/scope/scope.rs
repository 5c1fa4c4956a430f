use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Guard that silences callbacks after their owning scope is torn down.
///
/// Asynchronous flows hand wrapped callbacks to the host; when the view
/// that initiated them goes away, disposing the guard turns every wrapped
/// callback into a no-op. No timers are involved, just a shared flag.
///
/// # Examples
///
/// ```
/// use mural::ScopeGuard;
///
/// let guard = ScopeGuard::new();
/// let on_result = guard.wrap(|n: u32| n * 2);
///
/// assert_eq!(on_result(21), Some(42));
///
/// guard.dispose();
/// assert_eq!(on_result(21), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScopeGuard {
    disposed: Arc<AtomicBool>,
}

impl ScopeGuard {
    /// Create a live guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the guard has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Permanently disable all callbacks wrapped by this guard. Idempotent.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    /// Wrap a callback so it only runs while the guard is live.
    ///
    /// The wrapped callback returns `Some` with the inner result while
    /// live, and `None` after [`dispose`](ScopeGuard::dispose) without
    /// invoking the inner callback at all.
    pub fn wrap<A, R, F>(&self, f: F) -> impl Fn(A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        let disposed = Arc::clone(&self.disposed);
        move |arg| {
            if disposed.load(Ordering::SeqCst) {
                None
            } else {
                Some(f(arg))
            }
        }
    }

    /// Run a closure only while the guard is live.
    pub fn run<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        if self.is_disposed() {
            None
        } else {
            Some(f())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn wrapped_callback_runs_while_live() {
        let guard = ScopeGuard::new();
        let double = guard.wrap(|n: u32| n * 2);
        assert_eq!(double(5), Some(10));
    }

    #[test]
    fn dispose_silences_all_wrapped_callbacks() {
        let guard = ScopeGuard::new();
        let invocations = Arc::new(AtomicUsize::new(0));

        let wrapped = {
            let invocations = Arc::clone(&invocations);
            guard.wrap(move |_: ()| {
                invocations.fetch_add(1, Ordering::SeqCst);
            })
        };
        let also_wrapped = guard.wrap(|n: u32| n + 1);

        assert_eq!(wrapped(()), Some(()));
        guard.dispose();

        assert_eq!(wrapped(()), None);
        assert_eq!(also_wrapped(1), None);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispose_is_idempotent() {
        let guard = ScopeGuard::new();
        guard.dispose();
        guard.dispose();
        assert!(guard.is_disposed());
    }

    #[test]
    fn clones_share_the_flag() {
        let guard = ScopeGuard::new();
        let clone = guard.clone();
        let wrapped = guard.wrap(|n: u32| n);

        clone.dispose();
        assert!(guard.is_disposed());
        assert_eq!(wrapped(1), None);
    }

    #[test]
    fn run_respects_disposal() {
        let guard = ScopeGuard::new();
        assert_eq!(guard.run(|| 1), Some(1));
        guard.dispose();
        assert_eq!(guard.run(|| 1), None);
    }
}
