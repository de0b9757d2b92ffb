//! Profile sync workflow.
//!
//! Keeps a persona's row, its address and coordinates, and the image objects
//! it references consistent across the database and the bucket without a
//! cross-store transaction. Each operation runs its steps sequentially inside
//! the calling request:
//!
//! - [`images`] -- replace or clear one of the four image slots
//! - [`location`] -- address upsert, coordinates upsert with reverse-geocode backfill
//! - [`snapshot`] -- everything the profile editor loads in one read
//! - [`cleanup`] -- durable delete intents for objects that must go

pub mod cleanup;
pub mod images;
pub mod location;
pub mod snapshot;
