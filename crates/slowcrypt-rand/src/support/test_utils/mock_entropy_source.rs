// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behaviour for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Delegates to [`SystemEntropySource`].
    None,
    /// Writes `seed, seed + 1, seed + 2, ...` (wrapping) into every request.
    Deterministic(u8),
    /// Every call fails with the given error.
    FailAlways(EntropyError),
    /// The n-th call (1-based) fails with [`EntropyError::Unexpected`].
    FailAtNthFillBytes(usize),
}

/// Entropy source for tests.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock with the given behaviour.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource::default(),
            behaviour,
            calls: Cell::new(0),
        }
    }

    /// Changes the behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of `fill_bytes` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::Deterministic(seed) => {
                for (i, byte) in dest.iter_mut().enumerate() {
                    *byte = seed.wrapping_add(i as u8);
                }
                Ok(())
            }
            MockEntropySourceBehaviour::FailAlways(err) => Err(err),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if n == call => {
                Err(EntropyError::Unexpected)
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => self.inner.fill_bytes(dest),
        }
    }
}
