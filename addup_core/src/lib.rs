#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Entry-point arithmetic (output-agnostic).
//!
//! This crate only defines things: the fixed addends, the sum, and a
//! writer-generic way to render it. Linking it performs no work and prints
//! nothing; the `addup` binary in `addup_cli` is the sole invoker.

pub mod error;

use crate::error::Result;
use eyre::WrapErr;
use std::io::Write;

/// Left addend of the entry-point sum.
pub const LEFT_ADDEND: i32 = 1;
/// Right addend of the entry-point sum.
pub const RIGHT_ADDEND: i32 = 2;

/// Sum of two integers.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// The one computed value: `LEFT_ADDEND + RIGHT_ADDEND`, always 3.
#[inline]
pub fn total() -> i32 {
    add(LEFT_ADDEND, RIGHT_ADDEND)
}

/// Write the decimal total followed by a newline to `w`.
///
/// This is the only fallible operation in the program; the underlying
/// `io::Error` (e.g. a closed stdout) is propagated, not handled.
pub fn write_total(w: &mut impl Write) -> Result<()> {
    let total = total();
    tracing::debug!(total, "writing total");
    writeln!(w, "{total}").wrap_err("write total")?;
    Ok(())
}

#[cfg(test)]
mod total_tests {
    use super::*;

    #[test]
    fn fixed_addends_sum_to_three() {
        assert_eq!(total(), 3);
        assert_eq!(add(LEFT_ADDEND, RIGHT_ADDEND), 3);
    }

    #[test]
    fn renders_decimal_total_with_newline() {
        let mut buf = Vec::new();
        write_total(&mut buf).unwrap();
        assert_eq!(buf, b"3\n");
    }
}
