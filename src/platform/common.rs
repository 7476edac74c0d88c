//! Cross-platform reads shared by every platform implementation.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Host name reported by the OS, or `fallback` when unavailable.
pub fn host_name(fallback: &str) -> String {
    System::host_name()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            log::debug!("Host name unavailable, using '{}'", fallback);
            fallback.to_string()
        })
}

/// Login name from the environment (`USER`, `LOGNAME` or `USERNAME`).
pub fn env_user_name() -> Option<String> {
    ["USER", "LOGNAME", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Total number of logical processors.
pub fn processor_count() -> usize {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing());
    let sys = System::new_with_specifics(refresh);

    match sys.cpus().len() {
        0 => active_processor_count(),
        count => count,
    }
}

/// Processors this process may run on.
pub fn active_processor_count() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}

pub fn system_uptime() -> Duration {
    Duration::from_secs(System::uptime())
}

pub fn environment() -> HashMap<String, String> {
    std::env::vars().collect()
}

pub fn os_name() -> Option<String> {
    System::name().filter(|name| !name.is_empty())
}

pub fn os_version() -> Option<String> {
    System::os_version().filter(|version| !version.is_empty())
}

pub fn long_os_version() -> Option<String> {
    System::long_os_version().filter(|version| !version.is_empty())
}

pub fn kernel_version() -> Option<String> {
    System::kernel_version().filter(|version| !version.is_empty())
}

/// Run a command and return its trimmed stdout when it exits successfully.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            log::debug!("Failed to run {}: {}", program, e);
            return None;
        }
    };

    if !output.status.success() {
        log::debug!("{} {:?} exited with {}", program, args, output.status);
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!stdout.is_empty()).then_some(stdout)
}

/// Read a sysfs/procfs style file and return its trimmed content.
///
/// Device-tree strings carry a trailing NUL, which is stripped as well.
pub fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|content| content.trim_matches(|c: char| c == '\0' || c.is_whitespace()).to_string())
        .filter(|content| !content.is_empty())
}
