// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracking-number generation.
//!
//! Format: two-letter prefix, the last six digits of the current Unix time
//! in milliseconds, then six random base-36 characters in upper case. For
//! example `SC482913K7Q2ZD`.

use chrono::Utc;
use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 6;

/// Generate a tracking number for the current instant.
///
/// Uniqueness is not guaranteed here; the store rejects duplicates and the
/// manager retries.
pub fn generate_tracking_number(prefix: &str) -> String {
    generate_at(prefix, Utc::now().timestamp_millis(), &mut rand::thread_rng())
}

/// Generate a tracking number for a given millisecond timestamp.
pub fn generate_at<R: Rng + ?Sized>(prefix: &str, unix_millis: i64, rng: &mut R) -> String {
    let mut out = String::with_capacity(prefix.len() + 6 + SUFFIX_LEN);
    out.push_str(prefix);
    out.push_str(&format!("{:06}", unix_millis.rem_euclid(1_000_000)));
    for _ in 0..SUFFIX_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        out.push(char::from(ALPHABET[idx]));
    }
    out
}

/// Normalize caller input for lookup: trimmed and upper-cased.
pub fn normalize(tracking_number: &str) -> String {
    tracking_number.trim().to_ascii_uppercase()
}
