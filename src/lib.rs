//! # guardtext
//!
//! Defensive argument guards and a key/value debug-text formatter.
//!
//! ## Key Features
//!
//! - **Guards**: blank, empty, presence, and range checks that return a
//!   [`Result`] naming the offending parameter
//! - **Debug text**: one-line diagnostic strings from named values, with a
//!   null-inclusion policy and an optional prefix
//! - **Dynamic values**: [`DebugValue`] from primitives, collections, or any
//!   `T: Serialize`
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ### Guards
//!
//! ```rust
//! use guardtext::{CollectionExt, RangeExt, TextExt};
//!
//! fn connect(host: &str, ports: &[u16], timeout_ms: u64) -> guardtext::Result<()> {
//!     host.ensure_non_blank("host")?;
//!     ports.ensure_non_empty("ports")?;
//!     timeout_ms.ensure_positive("timeout_ms")?;
//!     Ok(())
//! }
//!
//! assert!(connect("db", &[5432], 1_000).is_ok());
//!
//! let err = connect(" ", &[5432], 1_000).unwrap_err();
//! assert_eq!(err.param(), Some("host"));
//! ```
//!
//! ### Debug Text
//!
//! ```rust
//! use guardtext::{format_debug_text, DebugValue};
//!
//! let text = format_debug_text(
//!     &[
//!         ("a", DebugValue::from("x")),
//!         ("b", DebugValue::from(vec![Some(1), None, Some(2)])),
//!         ("c", DebugValue::Null),
//!     ],
//!     false,
//!     Some("Pre"),
//! );
//! assert_eq!(text, "Pre a: x, b: 1,2");
//! ```
//!
//! ### Structs
//!
//! ```rust
//! use guardtext::{to_debug_text, DebugTextOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Job { name: &'static str, queue: Option<&'static str>, tags: Vec<&'static str> }
//!
//! let job = Job { name: "reindex", queue: None, tags: vec!["nightly", "search"] };
//! let text = to_debug_text(&job, &DebugTextOptions::new()).unwrap();
//! assert_eq!(text, "name: reindex, queue: (null), tags: nightly,search");
//! ```
//!
//! ## Logging
//!
//! Guard failures are emitted as `tracing` events at `DEBUG` level under the
//! `guardtext::guard` target. The library never installs a subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Formatting named values
//! - **`guards.rs`** - Validating arguments
//! - **`dynamic_values.rs`** - Building and converting `DebugValue`s
//!
//! Run any example with: `cargo run --example <name>`

pub mod builder;
pub mod collections;
pub mod debug_text;
pub mod error;
pub mod macros;
pub mod map;
pub mod numeric;
pub mod options;
pub mod presence;
pub mod ser;
pub mod string_values;
pub mod strings;
pub mod value;

pub use builder::BuilderExt;
pub use collections::CollectionExt;
pub use debug_text::{
    format_debug_text, format_debug_text1, format_debug_text2, format_debug_text3,
    format_debug_text_with, to_debug_text,
};
pub use error::{Error, Result};
pub use map::DebugMap;
pub use numeric::{RangeExt, Zero};
pub use options::DebugTextOptions;
pub use presence::OptionExt;
pub use ser::{to_value, DebugValueSerializer};
pub use string_values::StringValues;
pub use strings::{join_strings, TextExt};
pub use value::{DebugValue, Number, NULL_TEXT};
