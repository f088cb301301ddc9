// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Policy for [`SystemEntropySource`](crate::SystemEntropySource).
///
/// The default allows degrading to the insecure fallback and reads the
/// blocking `/dev/random`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RandConfig {
    bail_if_insecure: bool,
    non_blocking: bool,
}

impl RandConfig {
    /// Fail with [`EntropyError::Insecure`](crate::EntropyError::Insecure)
    /// instead of using the non-cryptographic fallback.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.bail_if_insecure = true;
        self
    }

    /// Read `/dev/urandom` instead of `/dev/random` when the device file is
    /// used.
    #[must_use]
    pub fn non_blocking(mut self) -> Self {
        self.non_blocking = true;
        self
    }

    /// Whether the insecure fallback is forbidden.
    pub fn bails_if_insecure(&self) -> bool {
        self.bail_if_insecure
    }

    /// Whether the non-blocking device is preferred.
    pub fn is_non_blocking(&self) -> bool {
        self.non_blocking
    }

    /// Path of the device file this configuration reads from.
    pub fn device_path(&self) -> &'static str {
        if self.non_blocking {
            "/dev/urandom"
        } else {
            "/dev/random"
        }
    }
}
