/// Node description command.
pub mod describe;
/// Collection iteration command.
pub mod entries;
/// Typed extraction command.
pub mod get;
/// Shared argument parsing and output helpers.
pub mod util;
