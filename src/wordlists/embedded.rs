//! Built-in word lists
//!
//! Generated by `build.rs` from `data/answers.txt` and `data/allowed.txt`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
