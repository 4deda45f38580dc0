// File: crates/hexbin-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for raster output.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookup)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
