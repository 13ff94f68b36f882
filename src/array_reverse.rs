// Array reversal, two ways: a manual backward walk and slice::reverse.

use crate::error::Result;
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

/// Reads `items` from the last element down to the first.
///
/// The leading position stays on the first element while the trailing
/// position steps back one element per read; the walk ends once the two
/// have crossed. An empty slice performs no reads.
pub fn walk_backward<T: Copy>(items: &[T]) -> Vec<T> {
    let mut walked = Vec::with_capacity(items.len());
    let leading = 0;
    // One past the next element to read, so it never drops below `leading`.
    let mut trailing = items.len();

    while trailing > leading {
        trailing -= 1;
        walked.push(items[trailing]);
    }

    walked
}

pub fn reverse_in_place<T>(items: &mut [T]) {
    items.reverse();
}

fn write_sequence<T: Display>(out: &mut impl Write, label: &str, items: &[T]) -> Result<()> {
    write!(out, "{label}: ")?;
    for item in items {
        write!(out, "{item} ")?;
    }
    Ok(())
}

pub fn run(numbers: &[i32], out: &mut impl Write) -> Result<()> {
    debug!(len = numbers.len(), "array reversal demo");

    write_sequence(out, "Original array", numbers)?;
    write!(out, "\n\n")?;

    write_sequence(out, "Reversed array", &walk_backward(numbers))?;
    write!(out, "\n\n")?;

    let mut working = numbers.to_vec();
    reverse_in_place(&mut working);
    write_sequence(out, "Alternative reverse", &working)?;
    writeln!(out)?;

    Ok(())
}
