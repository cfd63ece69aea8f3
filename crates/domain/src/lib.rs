//! # scenepanel-domain
//!
//! Pure domain model for the scenepanel home automation control panel.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Scenes** (saved presets of device states)
//! - Define **Zones** (addressable devices/areas with a [`ZoneType`](zone::ZoneType))
//! - Define **Buttons** (keypad buttons scenes can be bound to)
//! - Define the **scene list state** (view/edit mode, owned collections,
//!   last-write-wins prop updates, delete-by-id)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod button;
pub mod list_state;
pub mod scene;
pub mod zone;
