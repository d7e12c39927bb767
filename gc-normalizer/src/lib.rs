//! Normalize contact spreadsheets for import into GC
//!
//! Reads a sheet into a [`Table`], splits the free-text `Adresse` column into
//! GC address fields, rewrites client/supplier codes and caps every column to
//! the length GC accepts, then writes the result back as xlsx.

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod normalize;
pub mod table;

pub use config::NormalizeConfig;
pub use error::{NormalizeError, Result};
pub use normalize::{Normalized, standardize, standardize_with};
pub use table::{Table, Value};
