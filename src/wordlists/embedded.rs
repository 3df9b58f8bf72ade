//! Embedded word list
//!
//! Candidate targets compiled into the binary from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
