//! Commit and date stamped in by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line banner for `--version` and report headers.
pub fn version_banner() -> String {
    format!(
        "dropcalc {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
