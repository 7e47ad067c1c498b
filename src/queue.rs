//! Fixed-length preview of upcoming pieces

use crate::bag::Bag;
use crate::tetromino::TetrominoType;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Default number of pieces shown in the preview
pub const DEFAULT_PREVIEW_LEN: usize = 3;

/// FIFO of upcoming pieces, topped up from the bag on every pop
#[derive(Debug, Clone)]
pub struct PreviewQueue<R = ChaCha8Rng> {
    pieces: VecDeque<TetrominoType>,
    bag: Bag<R>,
}

impl<R: Rng> PreviewQueue<R> {
    /// Fill a queue of `len` pieces from the bag
    pub fn new(mut bag: Bag<R>, len: usize) -> Self {
        assert!(len > 0, "preview queue needs at least one slot");
        let pieces = (0..len).map(|_| bag.next()).collect();
        Self { pieces, bag }
    }

    /// Take the front piece and replenish the tail
    pub fn pop(&mut self) -> TetrominoType {
        let next = self.bag.next();
        self.pieces.push_back(next);
        match self.pieces.pop_front() {
            Some(piece) => piece,
            None => unreachable!("preview queue is never empty"),
        }
    }

    /// Drop the current contents and deal a fresh preview from the same bag
    pub fn refill(&mut self) {
        let len = self.pieces.len();
        self.pieces.clear();
        for _ in 0..len {
            self.pieces.push_back(self.bag.next());
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Upcoming pieces, front first
    pub fn iter(&self) -> impl Iterator<Item = TetrominoType> + '_ {
        self.pieces.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_its_length() {
        let mut queue = PreviewQueue::new(Bag::with_seed(5), 3);
        for _ in 0..20 {
            queue.pop();
            assert_eq!(queue.len(), 3);
        }
    }

    #[test]
    fn test_pop_is_fifo() {
        let mut queue = PreviewQueue::new(Bag::with_seed(11), 3);
        let before: Vec<_> = queue.iter().collect();
        assert_eq!(queue.pop(), before[0]);
        let after: Vec<_> = queue.iter().collect();
        assert_eq!(&after[..2], &before[1..]);
    }

    #[test]
    fn test_queue_follows_bag_order() {
        let mut reference = Bag::with_seed(21);
        let mut queue = PreviewQueue::new(Bag::with_seed(21), 3);
        for _ in 0..30 {
            assert_eq!(queue.pop(), reference.next());
        }
    }

    #[test]
    fn test_refill_keeps_length() {
        let mut queue = PreviewQueue::new(Bag::with_seed(8), 5);
        queue.refill();
        assert_eq!(queue.len(), 5);
    }
}
