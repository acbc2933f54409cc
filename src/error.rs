/// Failure taxonomy for the interpreter core.
///
/// All of these are surfaced synchronously from the operation that detects
/// them (`ExecutionEngine::advance`, `InputLatch::set_key_state`); none are
/// retried internally and none corrupt the engine's existing state before
/// returning.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Chip8Error {
    #[error("unknown opcode 0x{word:04X} at 0x{address:04X}")]
    UnknownOpcode { address: u16, word: u16 },

    #[error("instruction 0x{word:04X} at 0x{address:04X} is recognized but not implemented")]
    NotImplemented { address: u16, word: u16 },

    #[error("key index {key} is outside 0..=15")]
    InvalidKey { key: u8 },

    #[error("address 0x{address:04X} is outside the 4096-byte memory space")]
    OutOfRange { address: u16 },

    #[error("call stack overflow (depth exceeds 16)")]
    StackOverflow,

    #[error("call stack underflow (RETURN with empty stack)")]
    StackUnderflow,

    #[error("program of {len} bytes does not fit in the program region")]
    ProgramTooLarge { len: usize },
}
