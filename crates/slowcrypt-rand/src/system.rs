// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::config::RandConfig;
use crate::error::EntropyError;
use crate::fallback;
use crate::traits::EntropySource;

/// Largest request passed to a single source.
pub const CHUNK_SIZE: usize = 256;

type OsFill<'a> = &'a dyn Fn(&mut [u8]) -> Result<(), GetRandomError>;
type DeviceFill<'a> = &'a dyn Fn(&str, &mut [u8]) -> std::io::Result<()>;

/// Random bytes from the operating system, with a configurable fallback.
///
/// See the crate documentation for the order in which sources are tried.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {
    config: RandConfig,
}

impl SystemEntropySource {
    /// Creates a source with the given policy.
    pub fn new(config: RandConfig) -> Self {
        Self { config }
    }

    /// The policy in use.
    pub fn config(&self) -> RandConfig {
        self.config
    }

    pub(crate) fn fill_bytes_with(
        &self,
        os_fill: OsFill<'_>,
        device_fill: DeviceFill<'_>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        for chunk in dest.chunks_mut(CHUNK_SIZE) {
            self.fill_chunk(os_fill, device_fill, chunk)?;
        }

        Ok(())
    }

    fn fill_chunk(
        &self,
        os_fill: OsFill<'_>,
        device_fill: DeviceFill<'_>,
        chunk: &mut [u8],
    ) -> Result<(), EntropyError> {
        match os_fill(chunk) {
            Ok(()) => return Ok(()),
            Err(err) if err == GetRandomError::UNSUPPORTED => {
                tracing::debug!("OS random source unsupported, trying device file");
            }
            Err(err) => {
                tracing::debug!(error = %err, "OS random source failed");
                return Err(EntropyError::Unexpected);
            }
        }

        if cfg!(unix) {
            let path = self.config.device_path();
            match device_fill(path, chunk) {
                Ok(()) => return Ok(()),
                Err(err) => tracing::debug!(path, error = %err, "random device unavailable"),
            }
        }

        if self.config.bails_if_insecure() {
            return Err(EntropyError::Insecure);
        }

        tracing::warn!(
            len = chunk.len(),
            "no secure random source available, using time-seeded fallback"
        );
        fallback::fill_insecure(chunk);

        Ok(())
    }
}

fn read_device(path: &str, dest: &mut [u8]) -> std::io::Result<()> {
    use std::io::Read;

    std::fs::File::open(path)?.read_exact(dest)
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_with(&getrandom::fill, &read_device, dest)
    }
}
