use std::sync::Mutex;

use crate::error::Chip8Error;

/// 16 boolean key states for the CHIP-8 hex keypad (0x0-0xF).
///
/// This type owns only the key booleans; the WaitingForKey transition
/// itself (which register to write, when to unblock) is composed by
/// [`crate::engine::ExecutionEngine`], which is the only thing that knows
/// both the destination register and the register file.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputLatch {
    keys: [bool; 16],
}

impl InputLatch {
    pub fn new() -> Self {
        InputLatch::default()
    }

    pub fn is_pressed(&self, key: u8) -> Result<bool, Chip8Error> {
        self.keys
            .get(key as usize)
            .copied()
            .ok_or(Chip8Error::InvalidKey { key })
    }

    /// Records the new state of `key`, returning whether this was a
    /// rising edge (not-pressed -> pressed) — the only transition that can
    /// unblock a WaitingForKey engine.
    pub fn set_state(&mut self, key: u8, pressed: bool) -> Result<bool, Chip8Error> {
        let slot = self.keys.get_mut(key as usize).ok_or(Chip8Error::InvalidKey { key })?;
        let rising_edge = pressed && !*slot;
        *slot = pressed;
        Ok(rising_edge)
    }
}

/// Mutex-guarded [`InputLatch`] for hosts whose key-event delivery path
/// runs on a different thread than the tick loop calling
/// `ExecutionEngine::advance`. Serializes all reads/writes touching key
/// state so a press-edge arriving concurrently with a read of the waiting
/// flag can't be lost.
#[derive(Debug, Default)]
pub struct SyncInputLatch(Mutex<InputLatch>);

impl SyncInputLatch {
    pub fn new() -> Self {
        SyncInputLatch(Mutex::new(InputLatch::new()))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, InputLatch> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_does_not_mutate_state() {
        let mut latch = InputLatch::new();
        assert_eq!(
            latch.set_state(16, true),
            Err(Chip8Error::InvalidKey { key: 16 })
        );
        assert_eq!(latch.is_pressed(0).unwrap(), false);
    }

    #[test]
    fn rising_edge_detected_once_per_press() {
        let mut latch = InputLatch::new();
        assert_eq!(latch.set_state(7, true).unwrap(), true);
        assert_eq!(latch.set_state(7, true).unwrap(), false);
        assert_eq!(latch.set_state(7, false).unwrap(), false);
        assert_eq!(latch.set_state(7, true).unwrap(), true);
    }

    #[test]
    fn state_always_recorded_even_without_rising_edge() {
        let mut latch = InputLatch::new();
        latch.set_state(3, true).unwrap();
        assert!(latch.is_pressed(3).unwrap());
        latch.set_state(3, false).unwrap();
        assert!(!latch.is_pressed(3).unwrap());
    }

    #[test]
    fn sync_latch_serializes_access() {
        let latch = SyncInputLatch::new();
        latch.lock().set_state(1, true).unwrap();
        assert!(latch.lock().is_pressed(1).unwrap());
    }
}
