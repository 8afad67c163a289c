//! Theme system providing design tokens, breakpoints and color modes.
//!
//! A [`Theme`] is an immutable document loaded once (usually from JSON) and
//! shared read-only by every component. Tokens are addressed by a
//! [`TokenCategory`] and a dot path, e.g. `colors` + `primary.500`.

mod color;
pub use color::*;

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

mod length;
pub use length::*;

mod schema;
pub use schema::*;

mod tokens;
pub use tokens::*;
