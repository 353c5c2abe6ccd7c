//! ChainedList: doubly linked list whose nodes live in a per-list slot arena.
//!
//! The arena is the only owner of nodes. Forward and back links are arena
//! keys, so a link can never keep a node alive or outlive the list. Every
//! relink happens inside `Chain`; callers only ever see `NodeRef`, a
//! read-only cursor borrowed from the list.

use crate::error::UnderflowError;
use crate::reentrancy::DebugReentrancy;
use core::fmt;
use core::iter::FusedIterator;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// Arena plus endpoints. Kept apart from the guard so `ChainedList` can
/// relink while a scan guard is held.
struct Chain<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> Chain<T> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::new(),
            head: None,
            tail: None,
        }
    }

    fn link_front(&mut self, value: T) {
        let old_head = self.head;
        let k = self.nodes.insert(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head {
            Some(h) => self.nodes[h].prev = Some(k),
            None => self.tail = Some(k),
        }
        self.head = Some(k);
    }

    fn link_back(&mut self, value: T) {
        let old_tail = self.tail;
        let k = self.nodes.insert(Node {
            value,
            prev: old_tail,
            next: None,
        });
        match old_tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
    }

    /// Detach `k`, relinking its neighbours (or the endpoints) around it.
    fn unlink(&mut self, k: DefaultKey) -> Option<T> {
        let node = self.nodes.remove(k)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.nodes.clear();
    }
}

/// A generic doubly linked list with O(1) push/pop at both ends and
/// linear search, count and erase by equality.
pub struct ChainedList<T> {
    chain: Chain<T>,
    reentrancy: DebugReentrancy,
}

impl<T> ChainedList<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            reentrancy: DebugReentrancy::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.nodes.is_empty()
    }

    /// First value, or `UnderflowError` if the list is empty.
    pub fn front(&self) -> Result<&T, UnderflowError> {
        self.begin()
            .map(|n| n.value())
            .ok_or(UnderflowError::new("front"))
    }

    /// Last value, or `UnderflowError` if the list is empty.
    pub fn back(&self) -> Result<&T, UnderflowError> {
        self.end()
            .map(|n| n.value())
            .ok_or(UnderflowError::new("back"))
    }

    /// Cursor at the head node.
    pub fn begin(&self) -> Option<NodeRef<'_, T>> {
        self.chain.head.map(|key| NodeRef { list: self, key })
    }

    /// Cursor at the tail node.
    pub fn end(&self) -> Option<NodeRef<'_, T>> {
        self.chain.tail.map(|key| NodeRef { list: self, key })
    }

    /// First node, scanning from the head, whose value equals `value`.
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: PartialEq,
    {
        let _g = self.reentrancy.enter();
        let mut cursor = self.chain.head;
        while let Some(k) = cursor {
            let node = &self.chain.nodes[k];
            if node.value == *value {
                return Some(NodeRef { list: self, key: k });
            }
            cursor = node.next;
        }
        None
    }

    /// Number of nodes whose value equals `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let _g = self.reentrancy.enter();
        self.iter().filter(|v| *v == value).count()
    }

    pub fn push_front(&mut self, value: T) {
        self.chain.link_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.chain.link_back(value);
    }

    pub fn pop_front(&mut self) -> Result<T, UnderflowError> {
        let head = self.chain.head.ok_or(UnderflowError::new("pop_front"))?;
        self.chain
            .unlink(head)
            .ok_or(UnderflowError::new("pop_front"))
    }

    pub fn pop_back(&mut self) -> Result<T, UnderflowError> {
        let tail = self.chain.tail.ok_or(UnderflowError::new("pop_back"))?;
        self.chain
            .unlink(tail)
            .ok_or(UnderflowError::new("pop_back"))
    }

    /// Remove every node whose value equals `value` in a single pass and
    /// return how many were removed.
    ///
    /// Removed values are dropped after the scan has finished, so their
    /// `Drop` impls see a consistent list.
    pub fn erase(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let guard = self.reentrancy.enter();
        let mut removed = Vec::new();
        let mut cursor = self.chain.head;
        while let Some(k) = cursor {
            let node = &self.chain.nodes[k];
            cursor = node.next;
            if node.value == *value {
                removed.extend(self.chain.unlink(k));
            }
        }
        drop(guard);
        removed.len()
    }

    /// Exchange contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut ChainedList<T>) {
        core::mem::swap(&mut self.chain, &mut other.chain);
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.chain.head,
            back: self.chain.tail,
            remaining: self.len(),
        }
    }
}

impl<T> Default for ChainedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ChainedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ChainedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ChainedList<T> {}

impl<T> Extend<T> for ChainedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for ChainedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ChainedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ChainedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Read-only cursor at one node of a [`ChainedList`].
///
/// Borrowing the list keeps the node alive for as long as the cursor exists.
pub struct NodeRef<'a, T> {
    list: &'a ChainedList<T>,
    key: DefaultKey,
}

impl<'a, T> NodeRef<'a, T> {
    fn node(&self) -> &'a Node<T> {
        let list = self.list;
        &list.chain.nodes[self.key]
    }

    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        let list = self.list;
        self.node().next.map(|key| NodeRef { list, key })
    }

    pub fn previous(&self) -> Option<NodeRef<'a, T>> {
        let list = self.list;
        self.node().prev.map(|key| NodeRef { list, key })
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Two cursors are equal when they point at the same node of the same list.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.key == other.key
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}

/// Borrowing iterator, head to tail (or tail to head via `rev`).
pub struct Iter<'a, T> {
    list: &'a ChainedList<T>,
    front: Option<DefaultKey>,
    back: Option<DefaultKey>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.chain.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.chain.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator; pops from either end.
pub struct IntoIter<T> {
    list: ChainedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
impl<T> ChainedList<T> {
    /// Walk the chain both ways and report the first broken link, if any.
    pub(crate) fn check_links(&self) -> Result<(), String> {
        let nodes = &self.chain.nodes;
        match (self.chain.head, self.chain.tail) {
            (None, None) if nodes.is_empty() => return Ok(()),
            (None, None) => return Err(format!("no endpoints but {} nodes", nodes.len())),
            (Some(h), Some(t)) => {
                match nodes.get(h) {
                    Some(n) if n.prev.is_none() => {}
                    Some(_) => return Err("head has a back link".into()),
                    None => return Err("head is dangling".into()),
                }
                match nodes.get(t) {
                    Some(n) if n.next.is_none() => {}
                    Some(_) => return Err("tail has a forward link".into()),
                    None => return Err("tail is dangling".into()),
                }
            }
            _ => return Err("exactly one endpoint is set".into()),
        }

        let mut forward = Vec::with_capacity(nodes.len());
        let mut prev = None;
        let mut cursor = self.chain.head;
        while let Some(k) = cursor {
            if forward.len() == nodes.len() {
                return Err("forward walk longer than len (cycle?)".into());
            }
            let node = nodes
                .get(k)
                .ok_or_else(|| "dangling forward link".to_string())?;
            if node.prev != prev {
                return Err(format!("back link mismatch at position {}", forward.len()));
            }
            forward.push(k);
            prev = Some(k);
            cursor = node.next;
        }
        if prev != self.chain.tail {
            return Err("forward walk does not end at tail".into());
        }
        if forward.len() != nodes.len() {
            return Err(format!(
                "forward walk reached {} of {} nodes",
                forward.len(),
                nodes.len()
            ));
        }

        let mut backward = Vec::with_capacity(nodes.len());
        let mut cursor = self.chain.tail;
        while let Some(k) = cursor {
            if backward.len() == nodes.len() {
                return Err("backward walk longer than len (cycle?)".into());
            }
            let node = nodes
                .get(k)
                .ok_or_else(|| "dangling back link".to_string())?;
            backward.push(k);
            cursor = node.prev;
        }
        backward.reverse();
        if backward != forward {
            return Err("backward walk is not the reverse of the forward walk".into());
        }
        Ok(())
    }
}
