// File: crates/tickline-render-skia/build.rs
// Summary: Links the Windows system library Skia's font manager needs when targeting Windows.

fn main() {
    // Build scripts run on the host, so check the target through cargo's env.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
