//! Core types for cellar
//!
//! This crate provides the types used to keep a beer cellar in drinking
//! order:
//!
//! - [`Beer`] - One bottle: beer code, ready date and optional size
//! - [`Cellar`] - Bottles ordered by ready date, earliest first
//! - [`InsertCost`] - How disruptive adding a bottle would be
//! - [`Cursor`] - An independent forward reader over a cellar
//! - [`Printer`] - A sink that accepts one line of output at a time
//!
//! # Example
//!
//! ```
//! use cellar_core::{Beer, Cellar, InsertCost};
//!
//! let mut cellar = Cellar::new("home");
//! cellar.add(Beer::parse("1234~01/01/16~bomber").unwrap());
//! cellar.add(Beer::parse("1234~01/03/16~bomber").unwrap());
//!
//! // A bottle of the same beer in another size is flagged
//! let small = Beer::parse("1234~01/02/16~small").unwrap();
//! assert_eq!(cellar.insert_cost(&small), InsertCost::Incompatible);
//!
//! // Otherwise the cost is the distance to the nearest neighbour
//! let bomber = Beer::parse("1234~01/02/16~bomber").unwrap();
//! assert_eq!(cellar.insert_cost(&bomber), InsertCost::Cost(1));
//!
//! cellar.add(bomber);
//! let mut cursor = cellar.cursor();
//! assert_eq!(cursor.next().unwrap().to_string(), "1234~01/01/16~bomber");
//! assert_eq!(cursor.next().unwrap().to_string(), "1234~01/02/16~bomber");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod beer;
pub mod cellar;
pub mod cost;
pub mod cursor;
pub mod error;
pub mod print;

pub use beer::{Beer, DATE_FORMAT, DELIMITER};
pub use cellar::Cellar;
pub use cost::InsertCost;
pub use cursor::Cursor;
pub use error::{CellarError, ParseError};
pub use print::{Printer, StdoutPrinter};

// Re-export commonly used external types
pub use chrono::NaiveDate;
