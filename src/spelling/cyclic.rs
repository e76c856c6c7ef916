//! Circular sequence with a movable cursor.
//!
//! Items live in a plain vector and the cursor moves with modular arithmetic,
//! so the successor of the last item is the first and vice versa.

/// A fixed circular sequence and an optional current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicList<T> {
    items: Vec<T>,
    cursor: Option<usize>,
}

impl<T> CyclicList<T> {
    /// Create a list with the cursor unset.
    pub fn new(items: Vec<T>) -> Self {
        CyclicList {
            items,
            cursor: None,
        }
    }

    /// Move to the next item and return it.
    ///
    /// From the unset position this is the head. Returns `None` only when
    /// the list is empty.
    pub fn advance(&mut self) -> Option<&T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1) % len,
        };
        self.cursor = Some(next);
        self.items.get(next)
    }

    /// Move to the previous item and return it.
    ///
    /// From the unset position this is the tail.
    pub fn retreat(&mut self) -> Option<&T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let prev = match self.cursor {
            None => len - 1,
            Some(i) => (i + len - 1) % len,
        };
        self.cursor = Some(prev);
        self.items.get(prev)
    }

    /// The item under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    /// Cursor index, `None` while unset.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Unset the cursor.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for CyclicList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for CyclicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
