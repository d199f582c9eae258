//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//! - **Strategies**: Interchangeable text parsers behind one trait
//!
//! # Bounded Contexts
//!
//! - [`greek_analysis`]: Greek extraction, recommendation and banding

pub mod greek_analysis;
