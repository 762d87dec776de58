use thiserror::Error;

/// Failures of the Rust-level operations.
///
/// The C entry points collapse these into their sentinel return values; the
/// variants exist so Rust callers and tests can tell the cases apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrtError {
  /// An environment assignment without `=`.
  #[error("environment assignment has no '=' separator")]
  MissingSeparator,

  /// An empty variable name, or one containing `=`.
  #[error("invalid environment variable name")]
  InvalidName,

  /// The destination cannot hold the result and its terminator.
  #[error("destination holds {capacity} elements but {required} are needed")]
  BufferTooSmall { required: usize, capacity: usize },

  /// A required pointer argument was null.
  #[error("null argument")]
  NullArgument,

  /// Input that does not encode a single valid character.
  #[error("malformed input")]
  Malformed,

  /// The heap could not satisfy a request.
  #[error("out of memory")]
  OutOfMemory,

  /// The operating system rejected the call.
  #[error("os error: {0}")]
  Os(#[from] rustix::io::Errno),
}

pub type Result<T> = core::result::Result<T, CrtError>;
