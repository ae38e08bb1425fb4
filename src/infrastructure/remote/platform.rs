use crate::error::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

/// CEF 索引中可自动检测的平台标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    Linux64,
    LinuxArm64,
    MacosX64,
    MacosArm64,
    Windows64,
    WindowsArm64,
}

impl PlatformId {
    pub const ALL: [PlatformId; 6] = [
        PlatformId::Linux64,
        PlatformId::LinuxArm64,
        PlatformId::MacosX64,
        PlatformId::MacosArm64,
        PlatformId::Windows64,
        PlatformId::WindowsArm64,
    ];

    /// 索引中使用的键。
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Linux64 => "linux64",
            PlatformId::LinuxArm64 => "linuxarm64",
            PlatformId::MacosX64 => "macosx64",
            PlatformId::MacosArm64 => "macosarm64",
            PlatformId::Windows64 => "windows64",
            PlatformId::WindowsArm64 => "windowsarm64",
        }
    }

    /// 对应的 (system, machine) 组合。
    pub fn system_pair(&self) -> (&'static str, &'static str) {
        match self {
            PlatformId::Linux64 => ("Linux", "x86_64"),
            PlatformId::LinuxArm64 => ("Linux", "aarch64"),
            PlatformId::MacosX64 => ("Darwin", "x86_64"),
            PlatformId::MacosArm64 => ("Darwin", "arm64"),
            PlatformId::Windows64 => ("Windows", "AMD64"),
            PlatformId::WindowsArm64 => ("Windows", "ARM64"),
        }
    }

    /// 根据系统名和架构名查找平台标识。
    pub fn from_system(system: &str, machine: &str) -> AppResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.system_pair() == (system, machine))
            .ok_or_else(|| AppError::unsupported_platform(system, machine))
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AppError::config(format!("未知的平台标识: {s}")))
    }
}

/// 当前运行平台的 (system, machine)，命名与 CEF 平台表保持一致。
pub fn host_system() -> (String, String) {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    let system = match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        other => other,
    };

    let machine = match (system, arch) {
        ("Windows", "x86_64") => "AMD64",
        ("Windows", "aarch64") => "ARM64",
        ("Darwin", "aarch64") => "arm64",
        (_, other) => other,
    };

    (system.to_string(), machine.to_string())
}

/// 检测当前运行平台。
pub fn detect_platform() -> AppResult<PlatformId> {
    let (system, machine) = host_system();
    tracing::debug!(%system, %machine, "detecting platform");
    PlatformId::from_system(&system, &machine)
}
