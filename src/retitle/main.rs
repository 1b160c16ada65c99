#![no_main]

//! Demo: take a new title and a duration, show it, then sleep so it can be inspected with
//! `ps -o pid,args -p <pid>` or `cat /proc/<pid>/cmdline`.
//!
//! ```text
//! retitle [TITLE] [SECONDS]
//! ```

use core::ffi::{CStr, c_char, c_int};
use retitle::os::*;

const DEFAULT_SECONDS: i64 = 30;

/// # Safety
///
/// Platform ABI guarantees incoming C-style format
#[unsafe(no_mangle)]
pub unsafe extern "C" fn main(argc: c_int, argv: *mut *mut c_char, envp: *mut *mut c_char) -> c_int {
    // Safety: first thing in main, before any thread or getenv
    if let Err(errno) = unsafe { retitle::init(argc as isize, argv, envp) } {
        eprint("retitle: unable to reclaim argv: ");
        eprintln(errno);
    }

    // argv[1..] now points at relocated copies, so reading them is unaffected by the title
    let arg = |i: c_int| -> Option<&'static CStr> {
        if i >= argc {
            return None;
        }
        let p = unsafe { *argv.add(i as usize) };
        (!p.is_null()).then(|| unsafe { CStr::from_ptr(p) })
    };

    let seconds = match arg(2).map(|s| s.to_str().ok().and_then(|s| s.parse::<i64>().ok())) {
        None => DEFAULT_SECONDS,
        Some(Some(n)) if n >= 0 => n,
        Some(_) => {
            eprintln("retitle: SECONDS must be a non-negative integer");
            return 2;
        }
    };

    let result = match arg(1) {
        Some(title) => retitle::set_title!("{}", title.to_string_lossy()),
        None => retitle::set_title!("retitle: sleeping {}s", seconds),
    };
    if let Err(errno) = result {
        eprint("retitle: unable to set title: ");
        eprintln(errno);
        return 1;
    }

    print("pid ");
    println(getpid());
    if let Some(original) = retitle::original_title() {
        print("was ");
        println(original);
    }

    if let Err(errno) = sleep(seconds) {
        eprint("retitle: sleep: ");
        eprintln(errno);
        return 1;
    }

    // Put the original back before exiting, for anyone sampling the cmdline at the last moment
    let _ = retitle::set_title!();
    0
}
