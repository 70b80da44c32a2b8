// SPDX-License-Identifier: Apache-2.0

//! Seed table for reciprocal refinement.
//!
//! Input code `i` stands for the normalized mantissa `1.i`, i.e. the integer
//! `x = 2^input_bits + i`. Each entry holds the bits of `2^shift / x` that
//! follow its (always set) leading one, truncated to `lut_bits`.

use crate::lut_config::LutShape;

/// Computes a single table entry. `shape` is assumed to be validated.
pub fn reciprocal_seed(shape: &LutShape, code: u32) -> u32 {
    debug_assert!((code as usize) < shape.entry_count());
    let x = (1u64 << shape.input_bits) + u64::from(code);
    let quotient = (1u64 << shape.scale_shift()) / x;
    (quotient & shape.entry_mask()) as u32
}

/// Table produced once per run and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReciprocalLut {
    shape: LutShape,
    entries: Vec<u32>,
}

impl ReciprocalLut {
    pub fn generate(shape: &LutShape) -> Self {
        log::debug!(
            "ReciprocalLut::generate; input_bits: {} lut_bits: {} shift: {}",
            shape.input_bits,
            shape.lut_bits,
            shape.scale_shift()
        );
        let entries = (0..shape.entry_count() as u32)
            .map(|code| reciprocal_seed(shape, code))
            .collect();
        Self {
            shape: *shape,
            entries,
        }
    }

    pub fn shape(&self) -> &LutShape {
        &self.shape
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: usize) -> Option<u32> {
        self.entries.get(code).copied()
    }
}
