//! Core page logic for Prism Viewer
//!
//! This crate contains the decision logic behind the viewer page: the
//! embed attempt lifecycle with its timeout-based fallback, URL
//! normalization, text safety helpers, the search redirect, and the
//! random image panel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embed;
pub mod images;
pub mod search;
pub mod text;
pub mod url;
