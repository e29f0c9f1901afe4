//! The cellar: bottles kept in drinking order.
//!
//! A [`Cellar`] holds its bottles sorted by ready date, earliest first. There
//! is no separate sort pass; every insertion picks its own position, after
//! any bottles ready on the same day, so equal dates keep the order in which
//! they were added.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::beer::DATE_FORMAT;
use crate::{Beer, CellarError, Cursor, InsertCost, Printer};

/// An ordered collection of bottles with a name.
///
/// # Examples
///
/// ```
/// use cellar_core::{Beer, Cellar, InsertCost};
///
/// let mut cellar = Cellar::new("home");
/// assert_eq!(cellar.insert_cost(&Beer::parse("1~01/01/16").unwrap()), InsertCost::Empty);
///
/// cellar.add(Beer::parse("1~01/03/16").unwrap());
/// cellar.add(Beer::parse("1~01/01/16").unwrap());
///
/// let candidate = Beer::parse("1~01/02/16").unwrap();
/// assert_eq!(cellar.insert_cost(&candidate), InsertCost::Cost(1));
///
/// let dates: Vec<String> = cellar.iter().map(ToString::to_string).collect();
/// assert_eq!(dates, ["1~01/01/16", "1~01/03/16"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CellarFields")]
pub struct Cellar {
    name: String,
    beers: Vec<Beer>,
}

/// Serialized form of a [`Cellar`]; bottles may be in any order.
#[derive(Deserialize)]
struct CellarFields {
    name: String,
    #[serde(default)]
    beers: Vec<Beer>,
}

impl From<CellarFields> for Cellar {
    fn from(fields: CellarFields) -> Self {
        let mut cellar = Self::new(fields.name);
        cellar.extend(fields.beers);
        cellar
    }
}

impl Cellar {
    /// Create an empty cellar.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            beers: Vec::new(),
        }
    }

    /// The cellar's name. Loaders use the file path.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bottles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beers.len()
    }

    /// Check if the cellar holds no bottles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beers.is_empty()
    }

    /// All bottles in drinking order.
    #[must_use]
    pub fn beers(&self) -> &[Beer] {
        &self.beers
    }

    /// Iterate over the bottles in drinking order.
    pub fn iter(&self) -> std::slice::Iter<'_, Beer> {
        self.beers.iter()
    }

    /// Start a fresh cursor positioned before the first bottle.
    ///
    /// Cursors are independent: advancing one does not move any other.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.beers)
    }

    /// Index at which `beer` would be inserted.
    ///
    /// This is just after the last bottle ready on or before the
    /// candidate's date.
    #[must_use]
    pub fn insertion_point(&self, beer: &Beer) -> usize {
        let date = beer.ready_date();
        self.beers.partition_point(|b| b.ready_date() <= date)
    }

    /// How disruptive inserting `beer` would be.
    ///
    /// Returns [`InsertCost::Empty`] for an empty cellar and
    /// [`InsertCost::Incompatible`] when the same beer is already stored in
    /// another size. Otherwise the cost is the number of days to the nearer
    /// of the two bottles that would surround the candidate.
    #[must_use]
    pub fn insert_cost(&self, beer: &Beer) -> InsertCost {
        if self.beers.is_empty() {
            return InsertCost::Empty;
        }
        if self.conflicting(beer).is_some() {
            return InsertCost::Incompatible;
        }

        let at = self.insertion_point(beer);
        let before = at.checked_sub(1).map(|i| beer.days_between(&self.beers[i]));
        let after = self.beers.get(at).map(|b| beer.days_between(b));

        match (before, after) {
            (Some(a), Some(b)) => InsertCost::Cost(a.min(b)),
            (Some(d), None) | (None, Some(d)) => InsertCost::Cost(d),
            (None, None) => InsertCost::Empty,
        }
    }

    /// Put a bottle into the cellar.
    ///
    /// Always succeeds. The insertion cost is not consulted; see
    /// [`Cellar::add_checked`] for a variant that refuses incompatible sizes.
    pub fn add(&mut self, beer: Beer) {
        let at = self.insertion_point(&beer);
        self.beers.insert(at, beer);
    }

    /// Put a bottle into the cellar unless the same beer is already stored in
    /// a different size. Returns the cost the insertion had.
    pub fn add_checked(&mut self, beer: Beer) -> Result<InsertCost, CellarError> {
        if let Some(existing) = self.conflicting(&beer) {
            return Err(CellarError::IncompatibleSize {
                code: beer.code().to_string(),
                existing: existing.size().unwrap_or_default().to_string(),
                candidate: beer.size().unwrap_or_default().to_string(),
            });
        }
        let cost = self.insert_cost(&beer);
        self.add(beer);
        Ok(cost)
    }

    /// Distinct beer codes, in drinking order of their first bottle.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.beers
            .iter()
            .map(Beer::code)
            .filter(|code| seen.insert(*code))
            .collect()
    }

    /// Number of bottles of the given beer.
    #[must_use]
    pub fn count_by_code(&self, code: &str) -> usize {
        self.beers.iter().filter(|b| b.code() == code).count()
    }

    /// Bottles that are ready on or before `date`.
    pub fn ready_by(&self, date: NaiveDate) -> impl Iterator<Item = &Beer> {
        let end = self.beers.partition_point(|b| b.ready_date() <= date);
        self.beers[..end].iter()
    }

    /// Write one line per bottle followed by a summary line.
    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P) {
        for beer in &self.beers {
            printer.println(&format!(
                "{:<10} {}  {}",
                beer.code(),
                beer.ready_date().format(DATE_FORMAT),
                beer.size().unwrap_or("-")
            ));
        }
        let noun = if self.beers.len() == 1 {
            "bottle"
        } else {
            "bottles"
        };
        printer.println(&format!("{} {noun} in {}", self.beers.len(), self.name));
    }

    fn conflicting(&self, beer: &Beer) -> Option<&Beer> {
        self.beers.iter().find(|b| beer.conflicts_with(b))
    }
}

impl<'a> IntoIterator for &'a Cellar {
    type Item = &'a Beer;
    type IntoIter = std::slice::Iter<'a, Beer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Beer> for Cellar {
    fn extend<T: IntoIterator<Item = Beer>>(&mut self, iter: T) {
        for beer in iter {
            self.add(beer);
        }
    }
}
