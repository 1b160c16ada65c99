//! The process-wide title, for callers that do not want to thread a `ProcTitle` around.

use crate::err::Errno;
use crate::platform::LinuxPlatform;
use crate::title::ProcTitle;
use crate::types::{AtomicBool, Flag};
use core::cell::UnsafeCell;
use core::ffi::{CStr, c_char};
use core::fmt;

#[cfg(feature = "trace")]
type GlobalTrace = crate::trace::StderrTrace;
#[cfg(not(feature = "trace"))]
type GlobalTrace = crate::trace::NoTrace;

struct Global {
    initialized: AtomicBool,
    /// Held for the duration of `init` or one `set_title`
    busy: AtomicBool,
    title: UnsafeCell<ProcTitle<LinuxPlatform, GlobalTrace>>,
}

// Safety: `title` is only touched while holding `busy`
unsafe impl Sync for Global {}

static GLOBAL: Global = Global {
    initialized: AtomicBool::new(false),
    busy: AtomicBool::new(false),
    title: UnsafeCell::new(ProcTitle::new(LinuxPlatform, GlobalTrace {})),
};

/// Reclaim the process's argv + environ block so later `set_title!` calls can overwrite it.
///
/// Call once, first thing in `main`.  Errors are also kept for [`last_error`]; whatever happens,
/// the program may carry on, and `set_title!` becomes a no-op if the block could not be reclaimed.
/// Returns EALREADY on a second call.
///
/// # Safety
/// - `argc`, `argv` and `envp` must be exactly the values the C runtime passed to `main`.
/// - No other thread may exist yet, and nothing may hold pointers into argument or environment
///   strings (including from earlier `getenv` calls).
pub unsafe fn init(argc: isize, argv: *mut *mut c_char, envp: *mut *mut c_char) -> Result<(), Errno> {
    let Some(_busy) = Flag::try_acquire(&GLOBAL.busy) else {
        return Err(Errno::EBUSY);
    };
    if GLOBAL.initialized.swap(true) {
        return Err(Errno::EALREADY);
    }
    // Safety: exclusive through `busy`
    let title = unsafe { &mut *GLOBAL.title.get() };
    unsafe { title.initialize(argc, argv, envp) }
}

/// Backs `set_title!`.  Succeeds without doing anything before `init`.
///
/// Returns EBUSY, without touching the title, if another thread is setting it right now.
#[doc(hidden)]
pub fn set_title_args(title: Option<fmt::Arguments<'_>>) -> Result<(), Errno> {
    if !GLOBAL.initialized.get() {
        return Ok(());
    }
    let Some(_busy) = Flag::try_acquire(&GLOBAL.busy) else {
        return Err(Errno::EBUSY);
    };
    // Safety: exclusive through `busy`
    let title_state = unsafe { &mut *GLOBAL.title.get() };
    title_state.set_title(title)
}

/// Set the process title, `format!`-style.  With no arguments, restore the original argv[0].
///
/// ```ignore
/// retitle::set_title!("worker-{} [{}]", id, state)?;
/// retitle::set_title!()?;
/// ```
#[macro_export]
macro_rules! set_title {
    () => {
        $crate::set_title_args(None)
    };
    ($($arg:tt)+) => {
        $crate::set_title_args(Some(format_args!($($arg)+)))
    };
}

/// Most recent failure from `init` or `set_title!`, or None if busy
pub fn last_error() -> Option<Errno> {
    let _busy = Flag::try_acquire(&GLOBAL.busy)?;
    // Safety: exclusive through `busy`
    unsafe { &*GLOBAL.title.get() }.last_error()
}

/// argv[0] as it was before `init`
pub fn original_title() -> Option<&'static CStr> {
    if !GLOBAL.initialized.get() {
        return None;
    }
    let _busy = Flag::try_acquire(&GLOBAL.busy)?;
    // Safety: exclusive through `busy`.  `original` is written once, during `init`, and never
    // dropped since GLOBAL is static.
    let title = unsafe { &*GLOBAL.title.get() };
    title
        .original_title()
        .map(|s| unsafe { CStr::from_ptr(s.as_ptr()) })
}
