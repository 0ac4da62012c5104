//! Index-addressed node storage
//!
//! Nodes of a digit list are kept in a single growable vector and refer
//! to their neighbours by slot index. Back-links are plain data, so there
//! is no ownership cycle between neighbouring nodes. Released slots are
//! threaded onto a free list and reused by later allocations.

use crate::Digit;


/// One link in the chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub digit: Digit,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl Node {
    pub fn new(digit: Digit) -> Self {
        Self {
            digit: digit,
            prev: None,
            next: None,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot {
    Occupied(Node),
    /// Vacant slot, holding the next free slot index
    Vacant(Option<usize>),
}

/// Growable pool of nodes
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Option<usize>,
    occupied: usize,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Store node, returning its slot index
    pub fn alloc(&mut self, node: Node) -> usize {
        self.occupied += 1;
        match self.free {
            Some(idx) => {
                self.free = match self.slots[idx] {
                    Slot::Vacant(next_free) => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Release slot, returning the node it held
    pub fn release(&mut self, idx: usize) -> Node {
        let slot = std::mem::replace(&mut self.slots[idx], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.occupied -= 1;
                node
            }
            Slot::Vacant(_) => unreachable!("double release of slot {}", idx),
        }
    }

    pub fn node(&self, idx: usize) -> &Node {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("access to vacant slot {}", idx),
        }
    }

    pub fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("access to vacant slot {}", idx),
        }
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alloc_and_release() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(1));
        let b = arena.alloc(Node::new(2));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.node(a).digit, 1);
        assert_eq!(arena.node(b).digit, 2);

        let released = arena.release(a);
        assert_eq!(released.digit, 1);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(0));
        let b = arena.alloc(Node::new(1));
        arena.release(b);
        arena.release(a);

        // last released slot is handed out first
        assert_eq!(arena.alloc(Node::new(2)), a);
        assert_eq!(arena.alloc(Node::new(2)), b);
        assert_eq!(arena.alloc(Node::new(2)), 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn node_mut_updates_links() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(0));
        let b = arena.alloc(Node::new(1));
        arena.node_mut(a).next = Some(b);
        arena.node_mut(b).prev = Some(a);
        assert_eq!(arena.node(a).next, Some(b));
        assert_eq!(arena.node(b).prev, Some(a));
    }

    #[test]
    fn clear_resets() {
        let mut arena = Arena::new();
        arena.alloc(Node::new(0));
        arena.alloc(Node::new(0));
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.alloc(Node::new(1)), 0);
    }
}
