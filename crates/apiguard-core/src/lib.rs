//! # apiguard-core — Foundational Types
//!
//! Domain types shared by the contract scanner, the compliance checker,
//! and the `apiguard` CLI. This crate depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for keys.** [`ResourcePath`] validates its text once at
//!    construction; lookups afterwards are exact string equality with no
//!    normalization of case or trailing slashes.
//!
//! 2. **Closed verb set.** [`Verb`] is an enum of the seven HTTP verbs a
//!    contract document may declare. Unknown tokens are rejected when a
//!    manifest is loaded instead of silently never matching.
//!
//! 3. **Ordered manifest.** [`RequirementManifest`] keeps declaration
//!    order, which fixes the order in which violations are discovered.
//!
//! 4. **Verdicts are values.** A missing path or verb is a
//!    [`ComplianceResult::Violated`], not an error. [`GuardError`] is
//!    reserved for malformed configuration.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `apiguard-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod manifest;
pub mod mapping;
pub mod path;
pub mod verb;
pub mod verdict;

pub use error::GuardError;
pub use manifest::{Requirement, RequirementManifest};
pub use mapping::DeclaredMapping;
pub use path::ResourcePath;
pub use verb::{Verb, VerbSet};
pub use verdict::{ComplianceResult, Violation};
