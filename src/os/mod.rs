//! Safe wrappers over process-level operating system facilities

mod argv;
mod envp;
mod fd;
mod getpid;
mod print;
mod set_process_name;
mod sleep;
pub use argv::*;
pub use envp::*;
pub use fd::*;
pub use getpid::*;
pub use print::*;
pub use set_process_name::*;
pub use sleep::*;
