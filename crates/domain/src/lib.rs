//! # folio-domain
//!
//! Pure domain model for the folio portfolio page controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **theme** preference and its icon mapping
//! - Define **fragments** (in-page `#hash` targets) and **sections** (vertical ranges)
//! - Define the **scroll snapshot** derived from a scroll position
//! - Define the **mobile menu** state and its glyph mapping
//! - Define **filter categories** for the project gallery
//! - Define the static **widget options** handed to collaborator libraries
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser bindings.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod filter;
pub mod fragment;
pub mod menu;
pub mod scroll;
pub mod section;
pub mod theme;
pub mod widget;
