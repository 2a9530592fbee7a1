//! Models exchanged with the todo backend.
//!
//! Everything here is plain data plus parsing helpers so it compiles for
//! both the browser target and the native test target.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
