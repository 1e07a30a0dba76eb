//! A gallery of five classic design patterns, each demonstrated in isolation:
//! Builder, Factory Method, Facade, Iterator, and Constructor Dependency
//! Injection.
//!
//! Every pattern lives in its own module with a `demo()` function that builds
//! the section's narration as a plain string. Printing happens only in the
//! binary, so each section can be run and asserted on independently. The
//! [`gallery`] module stitches the five sections together in a fixed order.

pub mod builder;
pub mod facade;
pub mod factory;
pub mod gallery;
pub mod injection;
pub mod iterator;
