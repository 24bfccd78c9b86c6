// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! # smartscale core
//!
//! Accessibility-aware scaling for padding, frame sizes and text containers.
//!
//! The host UI layer supplies two things: the user's current
//! [SizeCategory](size_category::SizeCategory) and the "scaled metric" the
//! platform would natively use for a base value at that category. The
//! functions here return a damped value that still grows with the user's
//! setting but does not break layouts at the largest accessibility sizes.
//!
//! ```rust
//! use nalgebra::Vector2;
//! use smartscale_core::context::ScaleContext;
//! use smartscale_core::size_category::SizeCategory;
//!
//! let context = ScaleContext::new(SizeCategory::XxxLarge);
//! let frame = context.scaled_size(Vector2::new(100.0, 50.0), Vector2::new(150.0, 75.0));
//! assert_eq!(frame, Vector2::new(115.0, 57.5));
//! ```
//!
//! Everything is a pure function of its inputs; nothing here reads global
//! state or fails at runtime. Only parsing names into typed values can
//! return a [ScaleError](error::ScaleError).

/// Contains the [context::ScaleContext] struct.
pub mod context;
/// Contains the [error::ScaleError] enum.
pub mod error;
/// Contains the [metrics::TextStyle] baseline table.
pub mod metrics;
/// Contains the scaling use-cases.
pub mod scaling;
/// Contains the [size_category::SizeCategory] enum.
pub mod size_category;
/// Contains strategy selection and damping.
pub mod strategy;
