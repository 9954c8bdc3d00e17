//! tagval demo: the classic fixed sequence.
//!
//! Demonstrates:
//!   1. Duplicating a string into an 8-byte buffer and printing it twice
//!   2. Creating one value of each kind, two of them sharing a name
//!   3. Formatting and releasing the values
//!   4. Summing a 0-terminated run of integers
//!
//! Run with:
//!   cargo run --example demo
//!
//! Set `RUST_LOG=tagval_core=trace` to watch values being numbered and
//! released. Log output goes to stderr; stdout carries only the demo text.

use std::io::{self, Write};

use tagval::prelude::*;
use tracing_subscriber::EnvFilter;

// ─── Demo inputs ────────────────────────────────────────────────

const CONSTANT_STR: &str = "constant string";
const BUF_LEN: usize = 8;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // ─── Bounded duplication ────────────────────────────────────

    let mut data = BoundedBuf::<BUF_LEN>::new();
    data.write_twice("hello");
    print_twice(&mut out, data.as_bytes())?;
    writeln!(out, "\n{CONSTANT_STR}")?;

    // ─── Tagged values ──────────────────────────────────────────

    let tags = [
        TaggedValue::create_unsigned(5, "tag0"),
        TaggedValue::create_float(0.5, "tag1"),
        TaggedValue::create_text("mystring", "tag0"),
    ];

    for tag in &tags {
        writeln!(out, "{}", tag.format())?;
    }

    for tag in tags {
        tag.release();
    }

    // ─── Sentinel sum ───────────────────────────────────────────

    writeln!(out, "{}", tagval::add_ints!(1, 2, 3, 4, 5, 0))?;
    Ok(())
}
