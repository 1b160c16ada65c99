pub use crate::internal::MAX_TITLE;

/// Staging buffer size: the longest visible title plus its terminator
///
/// Titles are rendered here first rather than straight into the reclaimed span, both to bound the
/// work and because the rendered arguments may themselves reference the original argv[0].
pub const STAGING_CAPACITY: usize = MAX_TITLE + 1;

/// Kernel task name size, including the trailing null (TASK_COMM_LEN)
///
/// prctl(PR_SET_NAME) silently truncates to this, so we do so ourselves to avoid handing the
/// kernel an unterminated buffer.
pub const TASK_NAME_SIZE: usize = 16;

/// Written at argv[0]'s original terminator when the new title is shorter than the original.
///
/// Keeps the kernel's view of argv[0] at its original length rather than ending early in a run
/// of nulls.
pub const FILLER: u8 = b'.';

/// Written at argv[0]'s original terminator when the new title ends exactly there and the span
/// continues.
pub const SEPARATOR: u8 = b' ';
