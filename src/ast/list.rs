use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered, immutable sequence of child nodes.
///
/// Produced either directly from a `Vec` or by freezing a [`ListBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeList<T> {
    items: Vec<T>,
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn builder() -> ListBuilder<T> {
        ListBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for NodeList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Parse-time builder for [`NodeList`].
///
/// A right-recursive grammar reduces the last element first, so elements are
/// inserted at the front. `finish` keeps the builder's front-to-back order as
/// is: prepending `a` then `b` yields `[b, a]`.
#[derive(Debug)]
pub struct ListBuilder<T> {
    items: VecDeque<T>,
}

impl<T> ListBuilder<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn prepend(&mut self, item: T) -> &mut Self {
        self.items.push_front(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn finish(self) -> NodeList<T> {
        NodeList {
            items: Vec::from(self.items),
        }
    }
}

impl<T> Default for ListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_keeps_prepend_order() {
        let mut builder = ListBuilder::new();
        builder.prepend(1).prepend(2).prepend(3);
        assert_eq!(builder.len(), 3);
        let list = builder.finish();
        assert_eq!(list.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn empty_builder_finishes_empty() {
        let list: NodeList<u8> = ListBuilder::new().finish();
        assert!(list.is_empty());
        assert_eq!(list, NodeList::default());
    }
}
