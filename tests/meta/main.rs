//! Checks on the repository's test layout itself

#![allow(missing_docs)]

mod coverage;
