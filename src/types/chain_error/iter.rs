use core::iter::FusedIterator;

use super::Error;

/// Iterator over an error chain, from the outermost node toward the root.
///
/// Created by [`Error::chain`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(head: &'a Error) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source_error();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
