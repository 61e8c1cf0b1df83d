//! # routelens
//!
//! **routelens** resolves the HTTP routes declared by Spring-style mapping
//! annotations (`@GetMapping`, `@RequestMapping`, ...) in a parsed source tree.
//!
//! ## Overview
//!
//! A host tool (IDE plugin, indexer, build step) hands the engine its syntax
//! tree through three small traits and gets back one [`route::RouteDescriptor`]
//! per concrete route. Annotation values are constant-folded the way the
//! compiler would fold them, so a path built from `BASE + "/users"` becomes
//! `/api/users` when `BASE` is a string constant.
//!
//! ## Architecture
//!
//! - **[`syntax`]** - Host syntax model and its lookup traits
//! - **[`resolve`]** - Expression folding and attribute reading
//! - **[`path`]** - Path fragments, `{name:regex}` variables and prefix joining
//! - **[`binder`]** - Path-variable to parameter-type bindings
//! - **[`mapping`]** - The mapping annotation registry and verb normalization
//! - **[`assembler`]** - Class × method × params expansion into routes
//! - **[`contributor`]** - Whole-tree scanning into a [`contributor::ScanReport`]
//! - **[`presentation`]** - Labels and location strings for route lists
//! - **[`config`]**, **[`logging`]**, **[`cli`]** - Scan settings, tracing setup, the binary
//!
//! ### Resolution Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host
//!     participant Contributor as contributor::collect_routes
//!     participant Assembler as assembler::RouteAssembler
//!     participant Resolver as resolve::ExpressionResolver
//!     participant Binder as binder::bind
//!
//!     Host->>Contributor: index, symbols, config
//!     loop every registered kind
//!         Contributor->>Assembler: assemble(site, kind)
//!         Assembler->>Resolver: read path/value/params/method
//!         Resolver-->>Assembler: Vec<String>
//!         Assembler->>Binder: bind(parameters, PathVariable)
//!         Binder-->>Assembler: ParameterBinding
//!         Assembler-->>Contributor: Vec<RouteDescriptor>
//!     end
//!     Contributor-->>Host: ScanReport { routes, issues }
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routelens::config::ScanConfig;
//! use routelens::contributor::collect_routes;
//! use routelens::syntax::load_tree;
//!
//! let tree = load_tree("snapshot.yaml".as_ref())?;
//! let report = collect_routes(&tree, &tree, &ScanConfig::default());
//! for route in &report.routes {
//!     println!("{}", route.label());
//! }
//! ```
//!
//! Resolution is read-only and synchronous: the engine never mutates the tree
//! and holds no state between scans.

pub mod assembler;
pub mod binder;
pub mod cli;
pub mod config;
pub mod contributor;
pub mod error;
pub mod issues;
pub mod logging;
pub mod mapping;
pub mod path;
pub mod presentation;
pub mod resolve;
pub mod route;
pub mod syntax;

pub use assembler::RouteAssembler;
pub use config::ScanConfig;
pub use contributor::{collect_routes, ScanReport};
pub use error::RouteError;
pub use mapping::MappingAnnotationKind;
pub use route::{RouteDescriptor, RouteOrigin, SourceHandle};
