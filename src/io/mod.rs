//! Reading and writing polygons in external formats.

mod text;

pub use text::{decode_polygon, encode_polygon, DecodeError};
