//! Trace hooks for the one-shot relocation and the title writes
//!
//! The locator reports what it found and moved at the same points a C implementation would
//! `printf` from; where that goes is up to the `Trace` the title state was built with.

use crate::err::Errno;
use crate::os::{Hex, eprint, eprintln};
use core::ffi::CStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    CopyArg0,
    ProgramName,
    Environ,
    Args,
    Render,
    TaskName,
    Native,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::CopyArg0 => "copy argv[0]",
            Stage::ProgramName => "relocate program name",
            Stage::Environ => "relocate environment",
            Stage::Args => "relocate arguments",
            Stage::Render => "render title",
            Stage::TaskName => "set task name",
            Stage::Native => "set native title",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// The original argv[0] has been copied out of the span
    Arg0Copied { arg0: &'a CStr },
    /// The runtime's program name fields, before being moved
    ProgramNameBefore { full: &'a CStr, short: &'a CStr },
    /// The runtime's program name fields, after being moved
    ProgramNameAfter { full: &'a CStr, short: &'a CStr },
    /// Addresses of argv[0], its original terminator, and one past the last reclaimed byte
    SpanLocated {
        start: usize,
        logical_end: usize,
        physical_end: usize,
    },
    /// Number of variables re-installed; zero if someone else already moved the environment
    EnvRelocated { count: usize },
    /// Number of arguments past argv[0] moved to the heap
    ArgsRelocated { count: usize },
    /// Bytes of title now visible
    TitleWritten { len: usize },
    Failed { stage: Stage, errno: Errno },
}

pub trait Trace {
    fn event(&mut self, event: Event<'_>);
}

/// Discards everything
#[derive(Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    #[inline]
    fn event(&mut self, _: Event<'_>) {}
}

/// Reports on stderr, one line per event
#[derive(Default)]
pub struct StderrTrace;

impl Trace for StderrTrace {
    fn event(&mut self, event: Event<'_>) {
        eprint("retitle: ");
        match event {
            Event::Arg0Copied { arg0 } => {
                eprint("argv[0] copied: ");
                eprintln(arg0);
            }
            Event::ProgramNameBefore { full, short } => {
                eprint("original program name: ");
                print_name(full, short);
            }
            Event::ProgramNameAfter { full, short } => {
                eprint("relocated program name: ");
                print_name(full, short);
            }
            Event::SpanLocated {
                start,
                logical_end,
                physical_end,
            } => {
                eprint("span start ");
                eprint(Hex(start));
                eprint(" nul ");
                eprint(Hex(logical_end));
                eprint(" end ");
                eprint(Hex(physical_end));
                eprint(" (");
                eprint(physical_end.saturating_sub(start));
                eprintln(" bytes)");
            }
            Event::EnvRelocated { count } => {
                eprint("environment relocated: ");
                eprint(count);
                eprintln(" variables");
            }
            Event::ArgsRelocated { count } => {
                eprint("arguments relocated: ");
                eprintln(count);
            }
            Event::TitleWritten { len } => {
                eprint("title written: ");
                eprint(len);
                eprintln(" bytes");
            }
            Event::Failed { stage, errno } => {
                eprint("unable to ");
                eprint(stage.as_str());
                eprint(": ");
                eprintln(errno);
            }
        }
    }
}

fn print_name(full: &CStr, short: &CStr) {
    eprint(full);
    eprint(" (");
    eprint(Hex::of(full.as_ptr()));
    eprint("), short ");
    eprint(short);
    eprint(" (");
    eprint(Hex::of(short.as_ptr()));
    eprintln(")");
}

/// Keeps an owned copy of every event, for assertions
#[cfg(test)]
#[derive(Default)]
pub struct RecordTrace {
    pub events: Vec<String>,
}

#[cfg(test)]
impl Trace for RecordTrace {
    fn event(&mut self, event: Event<'_>) {
        self.events.push(format!("{event:?}"));
    }
}

#[cfg(test)]
impl RecordTrace {
    pub fn kinds(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(|e| e.split([' ', '{']).next().unwrap_or_default())
            .collect()
    }
}
