//! In-memory platform for exercising the locator and writer without touching the test process's
//! own argv and environment.

use super::{Platform, ProgramName};
use crate::err::Errno;
use core::ffi::{CStr, c_char};
use std::ffi::CString;

pub struct MockPlatform {
    environ: *mut *mut c_char,
    /// Variables installed through setenv, in order
    pub vars: Vec<(CString, CString)>,
    /// Fail the setenv call with this index (0-based) and every one after it
    pub fail_setenv_at: Option<usize>,
    setenv_calls: usize,
    /// Fail the strdup call with this index (0-based) and every one after it
    pub fail_strdup_at: Option<usize>,
    strdup_calls: usize,
    pub program_name: Option<ProgramName>,
    pub task_names: Vec<CString>,
    pub native: bool,
    pub native_titles: Vec<CString>,
}

impl MockPlatform {
    pub fn new(environ: *mut *mut c_char) -> Self {
        Self {
            environ,
            vars: Vec::new(),
            fail_setenv_at: None,
            setenv_calls: 0,
            fail_strdup_at: None,
            strdup_calls: 0,
            program_name: None,
            task_names: Vec::new(),
            native: false,
            native_titles: Vec::new(),
        }
    }

    /// Value of `name` as currently visible through `environ()`
    pub fn getenv(&self, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        unsafe { crate::os::Envp::from_raw(self.environ) }
            .map(|p| unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned())
            .find_map(|entry| entry.strip_prefix(&prefix).map(str::to_owned))
    }

    /// Rebuild the environment array from `vars`, the way a libc setenv grows its own copy.
    fn publish(&mut self) {
        let mut array: Vec<*mut c_char> = self
            .vars
            .iter()
            .map(|(name, value)| {
                let mut entry = name.as_bytes().to_vec();
                entry.push(b'=');
                entry.extend_from_slice(value.as_bytes());
                CString::new(entry).unwrap().into_raw()
            })
            .collect();
        array.push(core::ptr::null_mut());
        self.environ = Box::leak(array.into_boxed_slice()).as_mut_ptr();
    }
}

impl Platform for MockPlatform {
    fn environ(&self) -> *mut *mut c_char {
        self.environ
    }

    unsafe fn replace_environ(&mut self, envp: *mut *mut c_char) {
        self.environ = envp;
    }

    fn setenv(&mut self, name: &CStr, value: &CStr) -> Result<(), Errno> {
        let call = self.setenv_calls;
        self.setenv_calls += 1;
        if self.fail_setenv_at.is_some_and(|at| call >= at) {
            return Err(Errno::ENOMEM);
        }

        // A cleared environment starts the variable list over
        if self.environ.is_null() || unsafe { *self.environ }.is_null() {
            self.vars.clear();
        }
        self.vars.retain(|(n, _)| n.as_c_str() != name);
        self.vars.push((name.to_owned(), value.to_owned()));
        self.publish();
        Ok(())
    }

    fn strdup(&mut self, s: &CStr) -> Result<*mut c_char, Errno> {
        let call = self.strdup_calls;
        self.strdup_calls += 1;
        if self.fail_strdup_at.is_some_and(|at| call >= at) {
            return Err(Errno::ENOMEM);
        }
        crate::util::leak_cstr(s)
    }

    fn program_name(&self) -> Option<ProgramName> {
        self.program_name
    }

    unsafe fn set_program_name(&mut self, name: ProgramName) {
        self.program_name = Some(name);
    }

    fn set_task_name(&mut self, name: &CStr) -> Result<(), Errno> {
        self.task_names.push(name.to_owned());
        Ok(())
    }

    fn native_title(&self) -> bool {
        self.native
    }

    fn set_native_title(&mut self, title: &CStr) -> Result<(), Errno> {
        self.native_titles.push(title.to_owned());
        Ok(())
    }
}
