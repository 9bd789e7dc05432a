// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validated wrappers and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`WellFormedArray`, `SortedPrefix`) that check an
//!    invariant once at construction and carry the guarantee afterwards.
//!
//! 2. **Runtime contracts** that panic in debug builds when an algorithm breaks
//!    its own postcondition. Zero-cost in release.
//!
//! The algorithms themselves never validate their inputs. If you need to know
//! an array is well-formed or sorted before running something on it, this is
//! where you ask.

pub mod contracts;
mod types;

pub use types::*;
