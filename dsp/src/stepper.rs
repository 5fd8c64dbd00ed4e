//! Cycle-accurate sample stepper.
//!
//! Models a streaming source with registered outputs: every call to
//! [`Stepper::tick`] is one clock edge, and the returned [`Output`] is what
//! the output registers hold after that edge.

use num_complex::Complex;

use crate::config::FunctionType;
use crate::lut::Luts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Reset,
    Running,
}

/// Registered outputs of the stepper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Output {
    pub real: i16,
    pub imag: i16,
    /// A sample is present on `real`/`imag`.
    pub valid: bool,
    /// The sample is the last one of the table; the index wraps after it.
    pub last: bool,
}

impl Output {
    /// The sample pair as a complex number.
    pub fn sample(&self) -> Complex<i16> {
        Complex::new(self.real, self.imag)
    }
}

pub struct Stepper {
    luts: Luts,
    selector: u8,
    state: State,
    index: usize,
    output: Output,
}

impl Stepper {
    /// Construct a stepper streaming `function` out of `luts`.
    ///
    /// The stepper starts in the reset state, at index 0 with all outputs
    /// cleared.
    pub fn new(luts: Luts, function: FunctionType) -> Self {
        Self::with_selector_code(luts, function.code())
    }

    /// Construct a stepper from a raw function selector code.
    ///
    /// Codes without a matching [`FunctionType`] are accepted; such a stepper
    /// emits zero samples while still driving `valid` and `last`.
    pub fn with_selector_code(luts: Luts, selector: u8) -> Self {
        assert!(!luts.is_empty(), "lookup tables must not be empty");
        Self {
            luts,
            selector,
            state: State::Reset,
            index: 0,
            output: Output::default(),
        }
    }

    pub fn luts(&self) -> &Luts {
        &self.luts
    }

    /// The configured function, or `None` for an unknown selector code.
    pub fn function(&self) -> Option<FunctionType> {
        FunctionType::try_from(self.selector).ok()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The index that the next tick will read from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current contents of the output registers.
    pub fn output(&self) -> Output {
        self.output
    }

    /// Advance by one clock cycle.
    ///
    /// `reset` is sampled at the edge and takes priority over everything
    /// else. Returns the registered outputs after the edge.
    pub fn tick(&mut self, reset: bool) -> Output {
        if reset {
            if self.state != State::Reset {
                tracing::trace!(index = self.index, "reset asserted");
            }
            self.state = State::Reset;
            self.index = 0;
            self.output = Output::default();
            return self.output;
        }

        let index = self.index;
        let wrap = index == self.luts.len() - 1;

        let (real, imag) = match self.function() {
            Some(function) => self.luts.pair(function, index),
            None => (0, 0),
        };

        self.state = State::Running;
        self.index = if wrap { 0 } else { index + 1 };
        self.output = Output {
            real,
            imag,
            valid: true,
            last: wrap,
        };

        if wrap {
            tracing::trace!("table wrapped");
        }

        self.output
    }

    /// Fill the provided buffer with the next outputs, with reset deasserted.
    ///
    /// Same as calling `tick(false)` once per slot.
    pub fn fill(&mut self, buffer: &mut [Output]) {
        for slot in buffer {
            *slot = self.tick(false);
        }
    }
}
