//! Fixed-point lookup tables for the waveform generator.

use crate::config::FunctionType;
use crate::fixed::{quantize, FULL_SCALE};
use crate::math::{cos, sin, sinc, Real, PI};

/// Number of full periods swept across one table.
pub const PERIODS_PER_TABLE: usize = 8;

/// Exclusive half-width of the rectangular window around the table center.
///
/// The bound is strict on both sides, so the pulse covers
/// `center - 2 ..= center + 2`.
pub const RECT_HALF_WIDTH: i64 = 3;

/// The four quantized tables driving the generator.
///
/// All tables have the same length, which is also the wrap modulus of the
/// sample index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Luts {
    cos: Box<[i16]>,
    sin: Box<[i16]>,
    sinc: Box<[i16]>,
    rect: Box<[i16]>,
}

impl Luts {
    /// Build the tables for a given table size.
    ///
    /// For index `i`, the phase is `2 * PI * PERIODS_PER_TABLE * i / size`.
    /// The sinc table is centered on the middle of the table, and the
    /// rectangular window is a 5-sample pulse on the same center.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Use [`GeneratorConfig`](crate::config::GeneratorConfig)
    /// to get a validated size.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "table size must be positive");

        let n = size as Real;
        let sweep = 2.0 * PERIODS_PER_TABLE as Real * PI;
        let center = (size / 2) as i64;

        let mut cos_table = Vec::with_capacity(size);
        let mut sin_table = Vec::with_capacity(size);
        let mut sinc_table = Vec::with_capacity(size);
        let mut rect_table = Vec::with_capacity(size);

        for i in 0..size {
            let angle = sweep * i as Real / n;
            cos_table.push(quantize(cos(angle)));
            sin_table.push(quantize(sin(angle)));

            // Hard zero on the first entry and at the singularity itself;
            // the continuous limit is deliberately not used here.
            let x = angle - sweep / 2.0;
            sinc_table.push(if i == 0 || x == 0.0 {
                0
            } else {
                quantize(sinc(x))
            });

            let offset = i as i64 - center;
            rect_table.push(if offset.abs() < RECT_HALF_WIDTH {
                FULL_SCALE as i16
            } else {
                0
            });
        }

        tracing::debug!(size, "built lookup tables");

        Self {
            cos: cos_table.into_boxed_slice(),
            sin: sin_table.into_boxed_slice(),
            sinc: sinc_table.into_boxed_slice(),
            rect: rect_table.into_boxed_slice(),
        }
    }

    /// Number of entries in each table.
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    pub fn cos(&self) -> &[i16] {
        &self.cos
    }

    pub fn sin(&self) -> &[i16] {
        &self.sin
    }

    pub fn sinc(&self) -> &[i16] {
        &self.sinc
    }

    pub fn rect(&self) -> &[i16] {
        &self.rect
    }

    /// The `(real, imag)` pair emitted for `function` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn pair(&self, function: FunctionType, index: usize) -> (i16, i16) {
        match function {
            FunctionType::Exp => (self.cos[index], self.sin[index]),
            FunctionType::Sinc => (self.sinc[index], self.sinc[index]),
            FunctionType::Rect => (self.rect[index], self.rect[index]),
        }
    }
}

/// Build the cosine, sine, sinc and rectangular tables for `size` entries.
///
/// Shorthand for [`Luts::new`].
pub fn build_luts(size: usize) -> Luts {
    Luts::new(size)
}
