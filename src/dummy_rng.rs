use rand_core::{CryptoRng, RngCore};

/// A broken random source that emits the same byte forever.
///
/// Used to drive the bounded retry loops into exhaustion.
#[derive(Copy, Clone)]
pub(crate) struct StuckRng(pub u8);

impl RngCore for StuckRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_ne_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_ne_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for StuckRng {}
