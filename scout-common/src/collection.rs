use crate::pager::{page_range, total_pages};

/// Items per page in the collection view.
pub const COLLECTION_PAGE_SIZE: usize = 25;

/// Anything that can be stored in a [`Collection`].
pub trait CollectionEntry {
    /// Identity used for the membership check.
    fn entry_id(&self) -> u64;
}

/// Result of [`Collection::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was prepended.
    Added,
    /// An item with the same id already exists; nothing changed.
    AlreadyPresent,
}

/// The user's saved releases, newest first, with client-side paging.
///
/// Ids are unique. Items are never modified after being added.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::with_page_size(COLLECTION_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
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

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Items on the current page.
    pub fn page_items(&self) -> &[T] {
        &self.items[page_range(self.items.len(), self.page, self.page_size)]
    }

    /// Jump to `page`. Out of range values are ignored.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages().max(1) {
            return false;
        }
        self.page = page;
        true
    }

    /// Keep the current page within `1..=total_pages`.
    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }
}

impl<T: CollectionEntry> Collection<T> {
    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.entry_id() == id)
    }

    /// Prepend `item` unless its id is already present.
    pub fn add(&mut self, item: T) -> AddOutcome {
        if self.contains(item.entry_id()) {
            return AddOutcome::AlreadyPresent;
        }
        self.items.insert(0, item);
        AddOutcome::Added
    }

    /// Drop every item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.entry_id() != id);
        self.clamp_page();
        self.items.len() != before
    }
}
