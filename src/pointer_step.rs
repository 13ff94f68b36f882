// Pointer arithmetic across primitive kinds.
//
// Each value lives in the first slot of a two-slot buffer. Advancing the raw
// pointer by one element lands on the second slot, which is filled with a
// random value of the same kind. The read stays inside the buffer, so it is
// sound, but what it prints is unspecified and must never be asserted on.

use crate::config::PointerConfig;
use crate::error::Result;
use rand::distributions::{Distribution, Standard};
use std::fmt;
use std::io::Write;
use std::mem;
use tracing::debug;

/// A primitive kind the demo can observe.
pub trait Scalar: Copy + fmt::Debug {
    fn render(&self) -> String;
}

impl Scalar for i32 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Scalar for f32 {
    fn render(&self) -> String {
        format!("{self:.2}")
    }
}

impl Scalar for f64 {
    fn render(&self) -> String {
        format!("{self:.2}")
    }
}

// Printed numerically, like a C++ stream without boolalpha.
impl Scalar for bool {
    fn render(&self) -> String {
        u8::from(*self).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerStep {
    pub kind: &'static str,
    pub value: String,
    pub pointer_address: usize,
    pub dereferenced: String,
    pub variable_address: usize,
    pub advanced_address: usize,
    /// Signed distance in elements between the advanced and original pointer.
    pub distance: isize,
    pub element_width: usize,
    /// Unspecified. Differs between runs.
    pub neighbor: String,
}

pub fn observe<T>(kind: &'static str, value: T) -> PointerStep
where
    T: Scalar,
    Standard: Distribution<T>,
{
    let storage: [T; 2] = [value, rand::random::<T>()];
    let pointer: *const T = storage.as_ptr();
    let variable: *const T = &storage[0];

    // SAFETY: `storage` holds two initialised elements, so `pointer` and
    // `pointer.add(1)` both stay in bounds of the same allocation.
    let (dereferenced, advanced, distance, neighbor) = unsafe {
        let advanced = pointer.add(1);
        (*pointer, advanced, advanced.offset_from(pointer), *advanced)
    };

    debug!(kind, width = mem::size_of::<T>(), "observed pointer step");

    PointerStep {
        kind,
        value: value.render(),
        pointer_address: pointer as usize,
        dereferenced: dereferenced.render(),
        variable_address: variable as usize,
        advanced_address: advanced as usize,
        distance,
        element_width: mem::size_of::<T>(),
        neighbor: neighbor.render(),
    }
}

impl PointerStep {
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "=== {} DATA TYPE ===", self.kind)?;
        writeln!(out, "Original value: {}", self.value)?;
        writeln!(out, "Pointer address: {:#x}", self.pointer_address)?;
        writeln!(out, "Dereferenced value: {}", self.dereferenced)?;
        writeln!(out, "Variable address: {:#x}", self.variable_address)?;
        writeln!(out, "After increment:")?;
        writeln!(out, "  New address: {:#x}", self.advanced_address)?;
        writeln!(out, "  Address difference: {} positions", self.distance)?;
        writeln!(out, "  Memory offset: {} bytes", self.element_width)?;
        writeln!(out, "  Dereferenced (undefined): {}", self.neighbor)?;
        writeln!(out)?;
        Ok(())
    }
}

pub fn run(values: &PointerConfig, out: &mut impl Write) -> Result<()> {
    observe("INTEGER", values.integer).write_to(out)?;
    observe("FLOAT", values.float).write_to(out)?;
    observe("DOUBLE", values.double).write_to(out)?;
    observe("BOOLEAN", values.boolean).write_to(out)?;

    writeln!(out, "Note: Dereferencing incremented pointers accesses undefined memory!")?;
    writeln!(out, "This demonstration shows pointer arithmetic behavior across data types.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_step_invariants<T>(step: &PointerStep)
    where
        T: Scalar,
    {
        assert_eq!(step.variable_address, step.pointer_address);
        assert_eq!(step.distance, 1);
        assert_eq!(step.element_width, mem::size_of::<T>());
        assert_eq!(
            step.advanced_address - step.pointer_address,
            mem::size_of::<T>()
        );
        assert_eq!(step.dereferenced, step.value);
    }

    #[test]
    fn test_integer_step() {
        let step = observe("INTEGER", 140i32);
        assert_eq!(step.value, "140");
        assert_step_invariants::<i32>(&step);
    }

    #[test]
    fn test_float_step() {
        let step = observe("FLOAT", 14.75f32);
        assert_eq!(step.value, "14.75");
        assert_step_invariants::<f32>(&step);
    }

    #[test]
    fn test_double_step() {
        let step = observe("DOUBLE", 40.25f64);
        assert_eq!(step.value, "40.25");
        assert_step_invariants::<f64>(&step);
    }

    #[test]
    fn test_boolean_step() {
        let step = observe("BOOLEAN", true);
        assert_eq!(step.value, "1");
        assert_step_invariants::<bool>(&step);
        assert_eq!(observe("BOOLEAN", false).value, "0");
    }

    #[test]
    fn test_float_rendering_uses_two_decimals() {
        assert_eq!(3.0f32.render(), "3.00");
        assert_eq!((-2.5f64).render(), "-2.50");
    }

    #[test]
    fn test_block_layout() {
        let mut out = Vec::new();
        observe("INTEGER", 140i32).write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "=== INTEGER DATA TYPE ===");
        assert_eq!(lines[1], "Original value: 140");
        assert!(lines[2].starts_with("Pointer address: 0x"));
        assert_eq!(lines[3], "Dereferenced value: 140");
        // Variable address repeats the pointer address.
        assert_eq!(
            lines[2].trim_start_matches("Pointer address: "),
            lines[4].trim_start_matches("Variable address: ")
        );
        assert_eq!(lines[5], "After increment:");
        assert!(lines[6].starts_with("  New address: 0x"));
        assert_eq!(lines[7], "  Address difference: 1 positions");
        assert_eq!(
            lines[8],
            format!("  Memory offset: {} bytes", mem::size_of::<i32>())
        );
        // Only the label is checked, the value is unspecified.
        assert!(lines[9].starts_with("  Dereferenced (undefined): "));
        assert_eq!(lines[10], "");
    }

    #[test]
    fn test_run_covers_four_kinds_in_order() {
        let mut out = Vec::new();
        run(&PointerConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let headers: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("==="))
            .collect();
        assert_eq!(
            headers,
            vec![
                "=== INTEGER DATA TYPE ===",
                "=== FLOAT DATA TYPE ===",
                "=== DOUBLE DATA TYPE ===",
                "=== BOOLEAN DATA TYPE ===",
            ]
        );
        assert!(text.contains("Original value: 14.75\n"));
        assert!(text.contains("Original value: 40.25\n"));
        assert!(text.ends_with(
            "Note: Dereferencing incremented pointers accesses undefined memory!\n\
             This demonstration shows pointer arithmetic behavior across data types.\n"
        ));
    }
}
