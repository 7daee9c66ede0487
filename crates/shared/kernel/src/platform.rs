use matgen_domain::Platform;
use sysinfo::System;

/// Queries the host operating system name and kernel release.
///
/// The name is the OS family in `uname -s` spelling (`Linux`, `Darwin`, `Windows`),
/// not the distribution name. Never fails: values the host does not expose are
/// reported as `"unknown"`.
#[must_use]
pub fn detect() -> Platform {
    let system = system_name(std::env::consts::OS).map(str::to_owned);
    let platform = Platform::from_parts(system, System::kernel_version());
    tracing::debug!(system = %platform.system, release = %platform.release, "Platform detected");
    platform
}

/// Maps a Rust target OS identifier to the system name reported by `uname`.
#[must_use]
pub fn system_name(target_os: &str) -> Option<&'static str> {
    let name = match target_os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        _ => return None,
    };
    Some(name)
}
