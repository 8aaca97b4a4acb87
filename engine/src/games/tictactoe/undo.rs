use std::fmt;

use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::board::Board;
use super::move_log::MoveLog;
use super::types::Player;

/// State captured just before a move is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub move_log: MoveLog,
}

/// Bounded undo history; the oldest snapshot is evicted once full.
pub struct UndoStack {
    entries: AllocRingBuffer<UndoSnapshot>,
}

impl UndoStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: AllocRingBuffer::new(capacity),
        }
    }

    pub fn push(&mut self, snapshot: UndoSnapshot) {
        self.entries.enqueue(snapshot);
    }

    /// The ring buffer only dequeues from the oldest end, so the entries are
    /// moved out and the older ones re-enqueued. Nothing is cloned.
    pub fn pop(&mut self) -> Option<UndoSnapshot> {
        let mut remaining = Vec::with_capacity(self.entries.len());
        while let Some(snapshot) = self.entries.dequeue() {
            remaining.push(snapshot);
        }
        let last = remaining.pop();
        for snapshot in remaining {
            self.entries.enqueue(snapshot);
        }
        last
    }

    pub fn peek(&self) -> Option<&UndoSnapshot> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Debug for UndoStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.capacity())
            .finish()
    }
}
