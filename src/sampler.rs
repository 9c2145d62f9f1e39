// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-item reservoir sampling over the eligible-token stream.
//!
//! The i-th eligible token (1-based) replaces the held sample with probability
//! `1/i`. After `N` tokens every one of them is the final sample with
//! probability `1/N`, using O(1) memory and one pass.
//!
//! The state transition is a pure function ([`SampleState::observe`]) that
//! takes the random draw as an argument. [`ReservoirSampler`] pairs it with an
//! injected [`DrawSource`], so tests can script or seed the randomness.

use rand::Rng;

/// The currently held sample: a token and the `docID` of its line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Sample {
    pub word: String,
    pub line_index: u64,
}

/// Sampler state, threaded through [`SampleState::observe`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleState {
    pub sample: Option<Sample>,
    pub eligible_count: u64,
}

impl SampleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound for the draw that accompanies the next eligible token.
    pub fn next_bound(&self) -> u64 {
        self.eligible_count + 1
    }

    /// Feed one eligible token.
    ///
    /// `draw` must be uniform in `0..self.next_bound()`; the token is kept
    /// when it is zero.
    #[must_use]
    pub fn observe(self, word: &str, line_index: u64, draw: u64) -> Self {
        let eligible_count = self.eligible_count + 1;
        debug_assert!(draw < eligible_count, "draw {draw} out of range 0..{eligible_count}");
        let sample = if draw == 0 {
            Some(Sample {
                word: word.to_string(),
                line_index,
            })
        } else {
            self.sample
        };
        Self {
            sample,
            eligible_count,
        }
    }
}

/// A source of uniform draws in `0..bound`.
pub trait DrawSource {
    fn draw(&mut self, bound: u64) -> u64;
}

impl<R: Rng + ?Sized> DrawSource for R {
    fn draw(&mut self, bound: u64) -> u64 {
        self.random_range(0..bound)
    }
}

/// Reservoir sampler (k = 1) driven by an injected draw source.
pub struct ReservoirSampler<D> {
    state: SampleState,
    draws: D,
}

impl<D: DrawSource> ReservoirSampler<D> {
    pub fn new(draws: D) -> Self {
        Self {
            state: SampleState::new(),
            draws,
        }
    }

    /// Offer an eligible token found on line `line_index`.
    /// Returns true when it became the held sample.
    pub fn offer(&mut self, word: &str, line_index: u64) -> bool {
        let draw = self.draws.draw(self.state.next_bound());
        self.state = std::mem::take(&mut self.state).observe(word, line_index, draw);
        draw == 0
    }

    pub fn state(&self) -> &SampleState {
        &self.state
    }

    pub fn eligible_count(&self) -> u64 {
        self.state.eligible_count
    }

    pub fn into_state(self) -> SampleState {
        self.state
    }
}

/// Replays a fixed sequence of draws, then keeps returning the bound minus one
/// (never replacing).
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: std::vec::IntoIter<u64>,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<u64>) -> Self {
        Self {
            draws: draws.into_iter(),
        }
    }

    /// Draws that make the `n`-th (1-based) eligible token the final sample.
    pub fn landing_on(n: u64) -> Self {
        Self::new((1..=n).map(|i| u64::from(i != n)).collect())
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self, bound: u64) -> u64 {
        self.draws
            .next()
            .map_or(bound - 1, |draw| draw.min(bound - 1))
    }
}
