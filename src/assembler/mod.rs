//! # Assembler Module
//!
//! Turns one mapping-annotation occurrence into route descriptors.
//!
//! ## Overview
//!
//! For an annotation attached to a method, the assembler:
//!
//! 1. Binds `@PathVariable` parameters to their declared types
//! 2. Reads the class-level prefixes from the enclosing type's class mapping
//!    annotation (`path`, else `value`, else one empty prefix)
//! 3. Reads the method-level paths the same way; variables in both are typed
//!    from the binding
//! 4. Reads the `params` constraints (one empty constraint when absent)
//! 5. Emits the cartesian product of prefixes, paths and constraints
//!
//! The assembler is stateless; every call borrows the syntax tree only for
//! its own duration and returns owned descriptors.

mod core;
#[cfg(test)]
mod tests;

pub use self::core::RouteAssembler;
