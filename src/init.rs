//! Process-wide initialization
//!
//! The RustCrypto stack needs no engine setup, unlike OpenSSL-style
//! libraries. What remains worth doing once per process is probing the OS
//! random source, so a broken entropy device shows up at first use instead
//! of partway through a key generation.

use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Once;
use tracing::{debug, warn};

static INIT: Once = Once::new();

/// Probe the OS entropy source, once per process.
///
/// Idempotent. Both API entry points call this before dispatching work, so
/// explicit calls are only needed by hosts that want the probe at startup.
/// There is no teardown.
pub fn init() {
    INIT.call_once(|| {
        let mut probe = [0u8; 16];
        match OsRng.try_fill_bytes(&mut probe) {
            Ok(()) => debug!("OS entropy source ready"),
            Err(err) => warn!("OS entropy source probe failed: {}", err),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
