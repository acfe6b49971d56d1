//! Readers for Warcraft II data files
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::similar_names)] // Domain-specific naming patterns
#![allow(clippy::doc_markdown)] // Section tags don't need backticks
#![allow(clippy::return_self_not_must_use)] // Builder patterns
#![allow(clippy::use_self)] // Type clarity
#![allow(clippy::needless_pass_by_value)] // Configuration types
//! This crate decodes the two binary formats shipped with the game:
//!
//! - **WAR archives**: indexed containers holding palettes, minitile
//!   tables, pixel data and sprites
//! - **PUD maps**: tagged-section map descriptions
//!
//! # Modules
//!
//! - [`war`]: archive reader and entry extractor
//! - [`palette`]: 6-bit palette conversion
//! - [`tileset`]: 32x32 tile reconstruction from minitiles
//! - [`sprite`]: geometry-plus-pixels sprite records
//! - [`pud`]: section scanner, field parsers, allow-flag validators and dump
//! - [`catalog`]: static unit, upgrade, projectile and allowance tables
//!
//! Every operation is synchronous. Archives and maps hold cursor state and
//! take `&mut self` where it changes; palette conversion, tile composition
//! and catalog lookups are pure.

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod era;
pub mod error;
pub mod palette;
pub mod pud;
pub mod sprite;
pub mod tileset;
pub mod war;

pub use config::FormatsConfig;
pub use era::Era;
pub use error::ErrorKind;
pub use palette::{Color, Palette};
