// Build-time configuration generated by src/build/main.rs.
//
// This resolves to:
//
//     target/{debug,release}/build/retitle-*/out/config.rs
//
// If you see compiler errors about OUT_DIR being unset, it may be because this file is incorrectly
// `mod`'d from the build script.  Only lib.rs should `mod` it.
include!(concat!(env!("OUT_DIR"), "/config.rs"));
