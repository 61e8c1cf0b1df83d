//! # CLI Module
//!
//! Command-line front end over the route engine.
//!
//! ## Commands
//!
//! ### `scan`
//!
//! ```bash
//! routelens scan --tree snapshot.yaml [--config routelens.yaml] [--format json]
//! ```
//!
//! Options:
//! - `--tree <FILE>` - Syntax tree snapshot, YAML or JSON (required)
//! - `--config <FILE>` - Scan configuration
//! - `--format <text|json>` - Output format (default: text)
//! - `--fail-on-issues` - Exit non-zero when an occurrence was skipped
//!
//! ### `kinds`
//!
//! ```bash
//! routelens kinds
//! ```

mod commands;


pub use commands::{render_text, run_cli, Cli, Commands, OutputFormat};
