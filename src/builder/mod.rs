//! Construction API for building contracts.
//!
//! This module contains the append-only builder that external callers use
//! to assemble a contract before the single render pass. It handles:
//!
//! - Creating a contract from a name
//! - Appending globals and functions, by string type tag or as nodes
//! - Mapping type tags to type kinds via a static lookup table
//! - Delegating rendering and persistence once construction is done
//!
//! The builder never removes or reorders children; insertion order is the
//! rendering order.

pub mod builder;
pub mod lookups;
