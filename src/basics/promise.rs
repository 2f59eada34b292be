use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll, Waker},
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A value which will, at most once, settle to either `Ok(T)` or `Err(E)`.
///
/// This is the bridge between callback style host APIs and [`Future`]s. The
/// executor passed to [`Promise::new`] receives a [`Resolver`] which it hands
/// to whatever callback eventually produces the outcome. The callback may run
/// synchronously, or later on some other thread.
///
/// Settling consumes the [`Resolver`], so a promise can't be settled twice. If
/// the resolver is dropped without settling, the promise stays pending forever.
pub struct Promise<T, E> {
    handle: Handle<T, E>,
}

/// The settling half of a [`Promise`].
pub struct Resolver<T, E> {
    handle: Handle<T, E>,
}

struct Shared<T, E> {
    waker: Option<Waker>,
    outcome: Option<Result<T, E>>,
}

type Handle<T, E> = Arc<Mutex<Shared<T, E>>>;

fn lock<T, E>(handle: &Handle<T, E>) -> MutexGuard<'_, Shared<T, E>> {
    // neither side can panic while holding the lock, but don't propagate it if
    // it somehow happens.
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T, E> Promise<T, E> {
    pub fn new(executor: impl FnOnce(Resolver<T, E>)) -> Self {
        let handle = Arc::new(Mutex::new(Shared {
            waker: None,
            outcome: None,
        }));

        executor(Resolver {
            handle: Arc::clone(&handle),
        });

        Self { handle }
    }
}

impl<T, E> Resolver<T, E> {
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    pub fn reject(self, error: E) {
        self.settle(Err(error));
    }

    fn settle(self, outcome: Result<T, E>) {
        // take the waker out so we don't call into the executor while holding
        // our own lock.
        let waker = {
            let mut shared = lock(&self.handle);
            shared.outcome = Some(outcome);
            shared.waker.take()
        };

        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<T, E> Future for Promise<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut shared = lock(&self.handle);

        if let Some(outcome) = shared.outcome.take() {
            return Poll::Ready(outcome);
        }

        // the executor polling us may have changed since the last poll.
        match &mut shared.waker {
            Some(waker) => waker.clone_from(cx.waker()),
            None => shared.waker = Some(cx.waker().clone()),
        }

        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use futures_lite::future::{block_on, poll_once};

    use super::*;

    #[test]
    fn resolves_synchronously() {
        let promise = Promise::<u32, String>::new(|resolver| resolver.resolve(7));
        assert_eq!(block_on(promise), Ok(7));
    }

    #[test]
    fn rejects_synchronously() {
        let promise = Promise::<u32, String>::new(|resolver| resolver.reject("nope".into()));
        assert_eq!(block_on(promise), Err("nope".to_string()));
    }

    #[test]
    fn wakes_from_another_thread() {
        let promise = Promise::<&str, ()>::new(|resolver| {
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                resolver.resolve("late");
            });
        });
        assert_eq!(block_on(promise), Ok("late"));
    }

    #[test]
    fn dropped_resolver_never_settles() {
        let mut promise = Promise::<(), ()>::new(drop);
        assert!(block_on(poll_once(&mut promise)).is_none());
        assert!(block_on(poll_once(&mut promise)).is_none());
    }
}
