//! A fetch-decode-execute interpreter for CHIP-8's fixed instruction set,
//! over a flat addressable memory, a bank of general-purpose registers, a
//! call stack, a 60Hz countdown timer, and a bit-packed monochrome
//! framebuffer.
//!
//! ## Design
//!
//! * one instruction (or zero, while blocked on key input) executed per
//!   [`engine::ExecutionEngine::advance`] call, driven entirely by the
//!   host's own loop cadence
//! * the timer is decoupled from instruction execution rate — it advances
//!   by real elapsed time, not by cycle count
//! * memory out-of-range addressing faults rather than wrapping or
//!   clamping; the call stack is a dedicated fixed-depth array, never
//!   aliased onto addressable memory
//! * the PRNG behind `Cxnn` is an injected, seedable instance rather than
//!   a process-wide global, so tests can be deterministic
//!
//! Window creation, ROM selection, physical-keyboard mapping, and audio
//! output are host responsibilities — see the `gamekid` binary for a
//! concrete (winit + pixels) host around this core.

pub mod decoder;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod memory;
pub mod registers;
pub mod rng;
pub mod stack;
pub mod timer;

pub use decoder::{Decoder, Instruction};
pub use display::FramebufferView;
pub use engine::{EngineState, ExecutionEngine};
pub use error::Chip8Error;
pub use input::{InputLatch, SyncInputLatch};
pub use memory::MEMORY_SIZE;
pub use rng::{FastrandSource, RandomSource, SeededSource};
