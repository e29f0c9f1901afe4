//! Cellar CLI tools.
//!
//! This crate provides the `cellar` command for keeping a beer cellar file
//! in drinking order:
//!
//! - `cellar list`: Print every bottle, earliest ready first
//! - `cellar cost`: Show how disruptive adding a bottle would be
//! - `cellar add`: Add a bottle and save the file
//! - `cellar next`: Show the next bottles to drink
//! - `cellar check`: Report lines the loader had to skip
//!
//! # Example Usage
//!
//! ```bash
//! cellar add home.cellar "1234~01/01/16~bomber"
//! cellar list home.cellar
//! cellar next home.cellar -n 3
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
