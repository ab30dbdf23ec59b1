//! Wire records for eventlog callers
//!
//! This crate holds the [`CubeQuery`] data carrier: an OLAP query description
//! (cube name, measures, group-by set, selection) that travels as JSON.
//!
//! ## Wire Keys
//!
//! | Field | JSON key | JSON type |
//! |-------|----------|-----------|
//! | `id` | `id` | integer (32-bit signed) |
//! | `cube_name` | `cubeName` | string |
//! | `measures` | `measures` | array of string |
//! | `group_by_set` | `groupBySet` | array of string |
//! | `selection` | `selection` | array of any |
//!
//! Every field is optional. Absent fields are omitted on encode and accepted
//! as missing or `null` on decode. No validation is performed.
//!
//! ## Examples
//!
//! ```
//! use eventlog_wire::{decode_query, encode_query, CubeQuery};
//!
//! let query = CubeQuery::new()
//!     .with_cube_name("sales")
//!     .with_measures(vec!["revenue".to_string()]);
//!
//! let json = encode_query(&query).unwrap();
//! assert_eq!(json, r#"{"cubeName":"sales","measures":["revenue"]}"#);
//! assert_eq!(decode_query(&json).unwrap(), query);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;
pub mod query;

pub use json::{decode_query, encode_query, encode_query_pretty, DecodeError};
pub use query::CubeQuery;
