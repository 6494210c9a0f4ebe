//! Deferred state commits.
//!
//! A render pass must not write the state it is reading. Scenes that want to
//! react to something they noticed while drawing (a card passing edge-on,
//! say) push a command here instead, and the app drains the queue between
//! frames.

/// FIFO queue of state mutations to apply after the current frame.
#[derive(Debug)]
pub struct CommandQueue<C> {
    pending: Vec<C>,
}

impl<C> CommandQueue<C> {
    /// An empty queue.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue a command for the next flush.
    pub fn push(&mut self, command: C) {
        self.pending.push(command);
    }

    /// Take every pending command, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<C> {
        std::mem::take(&mut self.pending)
    }
}

impl<C> Default for CommandQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_push_order_and_empties() {
        let mut queue = CommandQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.drain(), vec![1, 2, 3]);
        assert!(queue.drain().is_empty());
    }
}
