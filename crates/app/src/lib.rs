//! # scenepanel-app
//!
//! Application layer — view-state use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ZoneSource` — one-shot fetch of the zones for the active system
//! - Define **driving/inbound** use-cases:
//!   - `ListStateController` — owns the scene list state, refreshes zones
//!     once on activation, reconciles prop updates and deletions
//!   - `TypeSelector` — selection state machine behind the zone type picker
//! - Define the **presentation contract** the hosting view renders through
//!
//! ## Dependency rule
//! Depends on `scenepanel-domain` only (plus `tokio` for the refresh task).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod list_controller;
pub mod ports;
pub mod presentation;
pub mod type_selector;
