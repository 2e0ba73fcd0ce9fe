// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files are embedded at build time. The locale comes from the
//! `--lang` flag, then `settings.toml`, then the OS, then `en-US`.

pub mod fluent;
