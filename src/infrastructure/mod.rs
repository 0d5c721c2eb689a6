//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer, providing concrete
//! data persistence.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
