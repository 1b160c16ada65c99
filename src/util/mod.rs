//! Allocation and buffer helpers shared by the locator and the writer

mod buf_writer;
mod mem;
pub use buf_writer::*;
pub use mem::*;
