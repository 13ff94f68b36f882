// String traversal four ways plus a per-character listing.
//
// Raw walks operate on a buffer of `char`s rather than UTF-8 bytes so that
// stepping backwards one element always lands on a whole character.

use crate::error::{DemoError, Result};
use std::io::Write;
use tracing::debug;

const SENTINEL: char = '\0';

/// Rejects text holding the sentinel, which would end the forward walk early.
pub fn ensure_no_sentinel(text: &str) -> Result<()> {
    match text.chars().position(|ch| ch == SENTINEL) {
        Some(position) => Err(DemoError::InteriorNul { position }),
        None => Ok(()),
    }
}

/// Copies `text` into a buffer terminated by a NUL sentinel.
fn terminated(text: &str) -> Result<Vec<char>> {
    ensure_no_sentinel(text)?;
    let mut buffer: Vec<char> = text.chars().collect();
    buffer.push(SENTINEL);
    Ok(buffer)
}

/// Walks a raw pointer from the first character until the sentinel.
pub fn walk_forward(text: &str) -> Result<String> {
    let buffer = terminated(text)?;
    let mut walked = String::with_capacity(text.len());
    let mut cursor = buffer.as_ptr();

    // SAFETY: the buffer always ends with SENTINEL and holds no other, so
    // the cursor stops on the last element and never leaves the buffer.
    unsafe {
        while *cursor != SENTINEL {
            walked.push(*cursor);
            cursor = cursor.add(1);
        }
    }

    Ok(walked)
}

/// Walks a raw pointer from the last character back to the first.
pub fn walk_backward(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut walked = String::with_capacity(text.len());
    let start = chars.as_ptr();
    let end = chars.as_ptr_range().end;
    // Starts one past the last character and steps back before each read.
    let mut cursor = end;

    // SAFETY: `cursor` moves from one-past-the-end down to `start` and is only
    // dereferenced after stepping back, so every read is in bounds. An empty
    // buffer has `start == end` and performs no reads.
    unsafe {
        while cursor > start {
            cursor = cursor.sub(1);
            walked.push(*cursor);
        }
    }

    walked
}

pub fn iterate_backward(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverses a working copy in place, leaving `text` untouched.
pub fn reversed_copy(text: &str) -> String {
    let mut working: Vec<char> = text.chars().collect();
    working.reverse();
    working.into_iter().collect()
}

pub fn positions(text: &str) -> Vec<(usize, char)> {
    text.chars().enumerate().collect()
}

pub fn run(text: &str, out: &mut impl Write) -> Result<()> {
    let forward = walk_forward(text)?;
    let count = text.chars().count();
    debug!(count, bytes = text.len(), "string traversal demo");

    writeln!(out, "Original string: {text}")?;
    writeln!(out, "Length: {count} characters")?;
    writeln!(out)?;

    writeln!(out, "Forward traversal (pointer style): {forward}")?;
    writeln!(out, "Reverse traversal (pointer arithmetic): {}", walk_backward(text))?;
    writeln!(out, "Reverse using iterators: {}", iterate_backward(text))?;
    writeln!(out, "Reverse using algorithm: {}", reversed_copy(text))?;

    writeln!(out, "\nCharacter analysis:")?;
    for (position, ch) in positions(text) {
        writeln!(out, "Position {position}: '{ch}'")?;
    }

    Ok(())
}
