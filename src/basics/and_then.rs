use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use std::task::ready;

use pin_project::pin_project;

/// Continuation chaining for fallible futures.
pub trait Chain<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Once `self` succeeds, feed its value to `f` and drive the future `f`
    /// returns. An error from `self` skips `f` and is returned as is.
    fn and_then<U, B, F>(self, f: F) -> AndThen<Self, B, F>
    where
        F: FnOnce(T) -> B,
        B: Future<Output = Result<U, E>>,
    {
        AndThen {
            state: State::First(self),
            f: Some(f),
        }
    }
}

impl<T, E, A: Future<Output = Result<T, E>>> Chain<T, E> for A {}

#[pin_project(project = StateProj)]
enum State<A, B> {
    First(#[pin] A),
    Second(#[pin] B),
}

#[pin_project]
pub struct AndThen<A, B, F> {
    #[pin]
    state: State<A, B>,
    f: Option<F>,
}

impl<A, B, F, T, U, E> Future for AndThen<A, B, F>
where
    A: Future<Output = Result<T, E>>,
    B: Future<Output = Result<U, E>>,
    F: FnOnce(T) -> B,
{
    type Output = Result<U, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match this.state.as_mut().project() {
                StateProj::First(a) => {
                    let value = match ready!(a.poll(cx)) {
                        Ok(value) => value,
                        Err(error) => return Poll::Ready(Err(error)),
                    };
                    let f = this.f.take().expect("AndThen polled after completion");
                    this.state.set(State::Second(f(value)));
                }
                StateProj::Second(b) => return b.poll(cx),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures_lite::future::{block_on, ready};

    use super::*;

    #[test]
    fn feeds_value_to_continuation() {
        let chained = ready(Ok::<_, ()>(2)).and_then(|n| ready(Ok(n * 21)));
        assert_eq!(block_on(chained), Ok(42));
    }

    #[test]
    fn error_skips_continuation() {
        let called = Cell::new(false);
        let chained = ready(Err::<u32, _>("first")).and_then(|n| {
            called.set(true);
            ready(Ok(n))
        });
        assert_eq!(block_on(chained), Err("first"));
        assert!(!called.get());
    }

    #[test]
    fn continuation_error_is_returned() {
        let chained = ready(Ok::<u32, _>(1))
            .and_then(|_| ready(Err::<u32, _>("second")))
            .and_then(|n| ready(Ok(n + 1)));
        assert_eq!(block_on(chained), Err("second"));
    }
}
