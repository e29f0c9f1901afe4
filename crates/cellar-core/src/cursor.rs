//! Forward cursor over a cellar.

use crate::Beer;

/// A read position in a cellar's drinking order.
///
/// The cursor starts before the first bottle; each call to [`Iterator::next`]
/// moves it forward by one and yields the bottle there, or `None` once every
/// bottle has been seen. A cursor borrows the cellar, so the cellar cannot
/// change underneath it, and any number of cursors can read the same cellar
/// at once.
///
/// ```
/// use cellar_core::{Beer, Cellar};
///
/// let mut cellar = Cellar::new("home");
/// cellar.add(Beer::parse("1~01/01/16").unwrap());
/// cellar.add(Beer::parse("2~01/02/16").unwrap());
///
/// let mut first = cellar.cursor();
/// let mut second = cellar.cursor();
/// assert_eq!(first.next().map(Beer::code), Some("1"));
/// assert_eq!(first.next().map(Beer::code), Some("2"));
/// assert_eq!(second.next().map(Beer::code), Some("1"));
/// assert_eq!(first.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    beers: &'a [Beer],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(beers: &'a [Beer]) -> Self {
        Self { beers, position: 0 }
    }

    /// Number of bottles already returned.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bottles still to come.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.beers.len() - self.position
    }

    /// The bottle the next call to `next` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Beer> {
        self.beers.get(self.position)
    }

    /// Move back before the first bottle.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Beer;

    fn next(&mut self) -> Option<Self::Item> {
        let beer = self.beers.get(self.position)?;
        self.position += 1;
        Some(beer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl std::iter::FusedIterator for Cursor<'_> {}
