//! FAQ accordion state.

use serde::Serialize;

/// Tracks which FAQ entry, if any, is expanded.
///
/// At most one entry is open at a time. Toggling the open entry closes it;
/// toggling another entry moves the open marker there.
///
/// # Example
///
/// ```
/// use idms_site::interaction::FaqAccordion;
///
/// let mut faq = FaqAccordion::closed();
/// faq.toggle(2);
/// faq.toggle(4);
/// assert_eq!(faq.open_index(), Some(4));
/// faq.toggle(4);
/// assert_eq!(faq.open_index(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// An accordion with every entry collapsed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Restores an accordion of `len` entries with `open` expanded.
    ///
    /// Indices outside the list leave the accordion fully closed.
    pub fn restore(open: Option<usize>, len: usize) -> Self {
        Self {
            open: open.filter(|index| *index < len),
        }
    }

    /// The expanded entry, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Whether the entry at `index` is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Handles a click on the header of the entry at `index`.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// The state after clicking the header at `index`.
    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }
}
