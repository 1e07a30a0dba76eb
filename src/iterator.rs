use std::ops::Index;

use thiserror::Error;

// =============================================================================
// Iterator: a fixed collection of named items traversed by a cursor with a
// configurable step size and explicit completion testing.
// =============================================================================

/// An immutable named entry in a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IterError {
    #[error("collection is empty")]
    Empty,
    #[error("position {position} is out of range for a collection of {len} items")]
    OutOfRange { position: usize, len: usize },
}

/// Ordered, append-only sequence of items, indexable by position.
#[derive(Debug, Default)]
pub struct Collection {
    items: Vec<Item>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexed write that always APPENDS: the index is accepted for call-site
    /// symmetry with reads but is not honored as a position. This mirrors a
    /// quirk of the original indexer (its setter ignored the index and pushed
    /// to the end), kept for output compatibility rather than fixed. Assign
    /// indices in ascending contiguous order to get array-like behavior.
    pub fn assign(&mut self, _index: usize, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Creates a cursor over this collection. The iterator borrows the
    /// collection rather than copying it, so the collection outlives every
    /// iterator created from it.
    pub fn create_iterator(&self) -> StepIterator<'_> {
        StepIterator {
            collection: self,
            position: 0,
            step: 1,
        }
    }
}

impl Index<usize> for Collection {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

/// Cursor over a [`Collection`] with explicit position, configurable step,
/// and completion testing. Done exactly when `position >= collection.len()`.
pub struct StepIterator<'a> {
    collection: &'a Collection,
    position: usize,
    step: usize,
}

impl<'a> StepIterator<'a> {
    /// Resets the cursor to position 0 and returns the first item.
    pub fn first(&mut self) -> Result<&'a Item, IterError> {
        self.position = 0;
        self.collection.get(0).ok_or(IterError::Empty)
    }

    /// Advances by the current step and returns the item there, or `None`
    /// once the cursor has run past the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a Item> {
        self.position += self.step;
        self.collection.get(self.position)
    }

    /// The item under the cursor, without advancing.
    pub fn current_item(&self) -> Result<&'a Item, IterError> {
        self.collection
            .get(self.position)
            .ok_or(IterError::OutOfRange {
                position: self.position,
                len: self.collection.len(),
            })
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.collection.len()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Changes the stride for future `next` calls; the current position is
    /// untouched.
    pub fn set_step(&mut self, step: usize) {
        assert!(step >= 1, "step must be at least 1");
        self.step = step;
    }
}

/// Builds a nine-item collection and walks it with step 2.
pub fn demo() -> String {
    let mut collection = Collection::new();
    for i in 0..9 {
        collection.assign(i, Item::new(format!("Item {i}")));
    }

    let mut iterator = collection.create_iterator();
    iterator.set_step(2);

    let mut out = String::from("\nIterating over collection:\n");
    let mut item = iterator.first().ok();
    while let Some(current) = item {
        out.push_str(current.name());
        out.push('\n');
        item = iterator.next();
    }
    out
}
