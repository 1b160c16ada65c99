//! Title state, and the two operations over it: `initialize` once, `set_title` any number of times.

mod locate;
mod span;
mod write;
pub use locate::*;
pub use span::*;
pub use write::*;

use crate::constants::STAGING_CAPACITY;
use crate::err::*;
use crate::os::Argv;
use crate::platform::Platform;
use crate::trace::{Event, Stage, Trace};
use crate::util::{BufWriter, try_nul_terminated};
use alloc::ffi::CString;
use core::ffi::{CStr, c_char};
use core::fmt::{self, Write};

/// Everything the writer needs, populated once by the locator
pub struct TitleState {
    /// argv[0] as it was at startup, the title restored by `set_title(None)`
    pub original: Option<CString>,
    /// None until initialization succeeds: no capability
    pub span: Option<TitleSpan>,
    /// Whether any title has been written, after which only a staging buffer's worth of the span
    /// needs clearing
    pub written: bool,
    /// Most recent failure from either operation
    pub last_error: Option<Errno>,
}

impl TitleState {
    pub const fn new() -> Self {
        Self {
            original: None,
            span: None,
            written: false,
            last_error: None,
        }
    }
}

impl Default for TitleState {
    fn default() -> Self {
        Self::new()
    }
}

/// The process title, over some platform, reporting to some trace
pub struct ProcTitle<P: Platform, T: Trace> {
    platform: P,
    trace: T,
    state: TitleState,
    initialized: bool,
}

impl<P: Platform, T: Trace> ProcTitle<P, T> {
    pub const fn new(platform: P, trace: T) -> Self {
        Self {
            platform,
            trace,
            state: TitleState::new(),
            initialized: false,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    pub fn state(&self) -> &TitleState {
        &self.state
    }

    pub fn span(&self) -> Option<&TitleSpan> {
        self.state.span.as_ref()
    }

    pub fn last_error(&self) -> Option<Errno> {
        self.state.last_error
    }

    pub fn original_title(&self) -> Option<&CStr> {
        self.state.original.as_deref()
    }

    /// Find and reclaim the argv + environ block.
    ///
    /// A missing argv[0] is not an error: the title simply cannot be changed.  Any failure leaves
    /// the title unchangeable and is also kept as `last_error`.  Only the first call does anything;
    /// later calls return EALREADY.
    ///
    /// # Safety
    /// - `argc`, `argv` and `envp` must be exactly what the C runtime passed to `main`, unmodified
    ///   by anything else.
    /// - No other thread may be running, and nothing may hold pointers into argv or environment
    ///   strings, since those are about to move.
    pub unsafe fn initialize(
        &mut self,
        argc: isize,
        argv: *mut *mut c_char,
        envp: *mut *mut c_char,
    ) -> Result<(), Errno> {
        if self.initialized {
            return Err(Errno::EALREADY);
        }
        self.initialized = true;

        let mut argv = unsafe { Argv::from_raw(argc, argv) };

        if self.platform.native_title() {
            if let Some(arg0) = argv.first() {
                self.copy_arg0(unsafe { CStr::from_ptr(arg0) })?;
            }
            return Ok(());
        }

        let Some(extent) = (unsafe { measure(&argv, envp) }) else {
            return Ok(());
        };
        let start = extent.start_addr();
        self.trace.event(Event::SpanLocated {
            start,
            logical_end: start + extent.logical_end,
            physical_end: start + extent.physical_end,
        });

        self.copy_arg0(unsafe { CStr::from_ptr(extent.start as *const c_char) })?;

        unsafe { relocate_program_name(&mut self.platform, &mut self.trace) }
            .record(&mut self.state.last_error)
            .inspect_err(|&errno| self.fail(Stage::ProgramName, errno))?;

        let count = unsafe { relocate_environ(&mut self.platform, envp) }
            .record(&mut self.state.last_error)
            .inspect_err(|&errno| self.fail(Stage::Environ, errno))?;
        self.trace.event(Event::EnvRelocated { count });

        let count = unsafe { relocate_args(&mut self.platform, &mut argv) }
            .record(&mut self.state.last_error)
            .inspect_err(|&errno| self.fail(Stage::Args, errno))?;
        self.trace.event(Event::ArgsRelocated { count });

        // Safety: every string that shared the block has been moved out, and the caller vouched
        // that nothing else holds pointers into it.
        self.state.span =
            unsafe { TitleSpan::new(extent.start, extent.logical_end, extent.physical_end) };

        Ok(())
    }

    fn copy_arg0(&mut self, arg0: &CStr) -> Result<(), Errno> {
        let original = try_nul_terminated(arg0.to_bytes())
            .and_then(|v| CString::from_vec_with_nul(v).map_err(|_| Errno::EINVAL))
            .record(&mut self.state.last_error)
            .inspect_err(|&errno| self.fail(Stage::CopyArg0, errno))?;

        self.trace.event(Event::Arg0Copied {
            arg0: original.as_c_str(),
        });
        self.state.original = Some(original);
        Ok(())
    }

    fn fail(&mut self, stage: Stage, errno: Errno) {
        self.trace.event(Event::Failed { stage, errno });
    }

    /// Replace the visible title.
    ///
    /// `None` restores the original argv[0].  Output longer than `MAX_TITLE` bytes, or longer than
    /// the reclaimed block, is cut short.  Without a reclaimed block this does nothing and succeeds.
    ///
    /// Output is cut at its first null.  Fails with EINVAL, leaving the current title in place, if
    /// formatting fails or renders nothing.
    pub fn set_title(&mut self, title: Option<fmt::Arguments<'_>>) -> Result<(), Errno> {
        if self.platform.native_title() {
            // Nothing to restore
            if title.is_none() && self.state.original.is_none() {
                return Ok(());
            }
            let rendered = self.render(title)?;
            let title = CStr::from_bytes_until_nul(rendered.as_bytes_with_nul())
                .map_err(|_| Errno::EINVAL)?;
            return self
                .platform
                .set_native_title(title)
                .record(&mut self.state.last_error)
                .inspect_err(|&errno| self.fail(Stage::Native, errno));
        }

        if self.state.span.is_none() {
            return Ok(());
        }

        #[cfg_attr(not(feature = "task-name"), allow(unused_mut))]
        let mut rendered = self.render(title)?;

        let Some(span) = self.state.span.as_mut() else {
            return Ok(());
        };
        let logical_end = span.logical_end();
        let len = overwrite(
            span.bytes_mut(),
            logical_end,
            rendered.as_slice(),
            !self.state.written,
        );
        self.state.written = true;
        self.trace.event(Event::TitleWritten { len });

        #[cfg(feature = "task-name")]
        {
            rendered.truncate(len);
            self.sync_task_name(&rendered);
        }

        Ok(())
    }

    /// Render into a staging buffer before anything touches the span
    fn render(
        &mut self,
        title: Option<fmt::Arguments<'_>>,
    ) -> Result<BufWriter<STAGING_CAPACITY>, Errno> {
        let mut rendered = BufWriter::<STAGING_CAPACITY>::new();
        let result = match title {
            Some(args) => rendered.write_fmt(args).map_err(|_| Errno::EINVAL),
            None => {
                if let Some(original) = &self.state.original {
                    rendered.push(original.to_bytes());
                }
                Ok(())
            }
        };

        // The kernel, and anything else reading argv[0], stops at the first null
        rendered.truncate_at_nul();

        result
            .and_then(|()| match rendered.pos() {
                0 => Err(Errno::EINVAL),
                _ => Ok(rendered),
            })
            .record(&mut self.state.last_error)
            .inspect_err(|&errno| self.fail(Stage::Render, errno))
    }

    /// Mirror the visible title into the kernel's task name.  Best effort: a failure is recorded but the
    /// command line has already changed.
    #[cfg(feature = "task-name")]
    fn sync_task_name(&mut self, rendered: &BufWriter<STAGING_CAPACITY>) {
        let Ok(name) = CStr::from_bytes_until_nul(rendered.as_bytes_with_nul()) else {
            return;
        };
        let _ = self
            .platform
            .set_task_name(name)
            .record(&mut self.state.last_error)
            .inspect_err(|&errno| self.fail(Stage::TaskName, errno));
    }
}
