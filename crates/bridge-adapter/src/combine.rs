//! Latest-value fan-in of two streams
//!
//! Emits `(left, right)` whenever either side produces a value, once both
//! sides have produced at least one. Ends when both sides end, or as soon as
//! one side ends without ever producing a value.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

pub struct CombineLatest<A: Stream, B: Stream> {
    left: A,
    right: B,
    left_latest: Option<A::Item>,
    right_latest: Option<B::Item>,
    left_done: bool,
    right_done: bool,
    left_first: bool,
}

// Items are only stored and cloned, never pinned
impl<A: Stream + Unpin, B: Stream + Unpin> Unpin for CombineLatest<A, B> {}

/// Combine two streams with latest-value semantics
pub fn combine_latest<A, B>(left: A, right: B) -> CombineLatest<A, B>
where
    A: Stream + Unpin,
    B: Stream + Unpin,
{
    CombineLatest {
        left,
        right,
        left_latest: None,
        right_latest: None,
        left_done: false,
        right_done: false,
        left_first: false,
    }
}

impl<A, B> CombineLatest<A, B>
where
    A: Stream + Unpin,
    B: Stream + Unpin,
    A::Item: Clone,
    B::Item: Clone,
{
    fn pair(&self) -> Option<(A::Item, B::Item)> {
        match (&self.left_latest, &self.right_latest) {
            (Some(left), Some(right)) => Some((left.clone(), right.clone())),
            _ => None,
        }
    }

    fn is_done(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_done,
            Side::Right => self.right_done,
        }
    }

    /// Poll one side. `Ready(true)` means it yielded a value or just finished.
    fn poll_side(&mut self, side: Side, cx: &mut Context<'_>) -> Poll<bool> {
        match side {
            Side::Left => match Pin::new(&mut self.left).poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    self.left_latest = Some(item);
                    Poll::Ready(true)
                }
                Poll::Ready(None) => {
                    self.left_done = true;
                    Poll::Ready(true)
                }
                Poll::Pending => Poll::Pending,
            },
            Side::Right => match Pin::new(&mut self.right).poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    self.right_latest = Some(item);
                    Poll::Ready(true)
                }
                Poll::Ready(None) => {
                    self.right_done = true;
                    Poll::Ready(true)
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }

    fn starved(&self) -> bool {
        (self.left_done && self.left_latest.is_none())
            || (self.right_done && self.right_latest.is_none())
    }
}

impl<A, B> Stream for CombineLatest<A, B>
where
    A: Stream + Unpin,
    B: Stream + Unpin,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        // Alternate which side goes first so a busy side cannot starve the other
        this.left_first = !this.left_first;
        let order = if this.left_first {
            [Side::Left, Side::Right]
        } else {
            [Side::Right, Side::Left]
        };

        loop {
            let mut progressed = false;

            for side in order {
                if this.is_done(side) {
                    continue;
                }

                let Poll::Ready(_) = this.poll_side(side, cx) else {
                    continue;
                };
                progressed = true;

                if this.starved() {
                    return Poll::Ready(None);
                }
                if !this.is_done(side) {
                    if let Some(pair) = this.pair() {
                        return Poll::Ready(Some(pair));
                    }
                }
            }

            if this.left_done && this.right_done {
                return Poll::Ready(None);
            }
            if !progressed {
                return Poll::Pending;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::stream::{self, StreamExt};
    use futures::FutureExt;

    #[tokio::test]
    async fn test_waits_for_both_sides() {
        let (left_tx, left_rx) = mpsc::unbounded::<u32>();
        let (right_tx, right_rx) = mpsc::unbounded::<&str>();
        let mut combined = combine_latest(left_rx, right_rx);

        left_tx.unbounded_send(1).unwrap();
        assert!(combined.next().now_or_never().is_none());

        right_tx.unbounded_send("a").unwrap();
        assert_eq!(combined.next().await, Some((1, "a")));

        left_tx.unbounded_send(2).unwrap();
        assert_eq!(combined.next().await, Some((2, "a")));

        right_tx.unbounded_send("b").unwrap();
        assert_eq!(combined.next().await, Some((2, "b")));
    }

    #[tokio::test]
    async fn test_keeps_latest_after_one_side_ends() {
        let left = stream::iter(vec![10, 20, 30]);
        let right = stream::iter(vec![1]);

        let items: Vec<_> = combine_latest(left, right).collect().await;
        assert_eq!(items.last(), Some(&(30, 1)));
        assert!(items.iter().all(|(_, fee)| *fee == 1));
    }

    #[tokio::test]
    async fn test_empty_side_completes_immediately() {
        let (_left_tx, left_rx) = mpsc::unbounded::<u32>();
        let right = stream::empty::<u32>();

        let mut combined = combine_latest(left_rx, right);
        assert_eq!(combined.next().await, None);
    }

    #[tokio::test]
    async fn test_completes_when_both_end() {
        let (left_tx, left_rx) = mpsc::unbounded::<u32>();
        let (right_tx, right_rx) = mpsc::unbounded::<u32>();
        let mut combined = combine_latest(left_rx, right_rx);

        left_tx.unbounded_send(1).unwrap();
        right_tx.unbounded_send(2).unwrap();
        assert_eq!(combined.next().await, Some((1, 2)));

        drop(right_tx);
        left_tx.unbounded_send(3).unwrap();
        assert_eq!(combined.next().await, Some((3, 2)));

        drop(left_tx);
        assert_eq!(combined.next().await, None);
    }
}
