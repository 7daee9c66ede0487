use crate::handlers::RULE;
use matgen_domain::Platform;

/// Detects the host platform and prints it. The result is informational only.
pub fn report_platform() -> Platform {
    println!("\nDetecting system and release version ...\n");
    let platform = matgen_kernel::platform::detect();

    println!("{RULE}");
    println!("Configuration detected:");
    println!("{RULE}");
    println!("\nPlatform:\n{}", platform.system);
    println!("Release:\n{}", platform.release);

    platform
}
