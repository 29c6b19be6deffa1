//! String helpers for textkit.
//!
//! Everything here is a pure function over `&str` or `&[u8]`, except the
//! stream reader which drains an owned `std::io::Read`.

pub mod capitalize;
pub mod hex;
pub mod join;
pub mod predicate;
pub mod stream;

pub use capitalize::{capitalize, capitalize_fully, capitalize_fully_with, capitalize_with};
pub use crate::hex::{bytes_to_hex, hex_to_bytes, HEX_CHARS};
pub use join::{join, Separator};
pub use predicate::{
    any_match, any_starts_with, contains, equals_any, equals_any_ignore_case, equals_ignore_case,
    is_blank, is_not_blank, starts_with_any, starts_with_ignore_case,
};
pub use stream::{read_from, try_read_from, StreamReader};
