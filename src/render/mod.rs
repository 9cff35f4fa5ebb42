//! Markup rendering helpers for the injection pass.
//!
//! Split into focused submodules so tag construction and document splicing can be
//! tested independently of the requirement registry.

pub mod splice;
pub mod tags;
