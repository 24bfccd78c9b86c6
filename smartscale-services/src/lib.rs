// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! Settings for smartscale.
//!
//! Loads the ambient ceiling and per-use-case ratio overrides from TOML
//! files in the XDG directories and from environment variables, and turns
//! them into a [ScaleContext](smartscale_core::context::ScaleContext) the
//! host passes down its view tree.

/// Contains the [error::SettingsError] enum.
pub mod error;
/// Contains [settings::ScaleSettings] and [settings::SettingsRegistry].
pub mod settings;
