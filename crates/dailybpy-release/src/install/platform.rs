use dailybpy_core::{DailybpyError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOS,
    Linux,
    Windows,
}

impl Os {
    /// Accepts `std::env::consts::OS` values and common aliases, case-insensitively
    pub fn parse(os: &str) -> Option<Self> {
        match os.to_ascii_lowercase().as_str() {
            "linux" => Some(Os::Linux),
            "darwin" | "macos" => Some(Os::MacOS),
            "windows" => Some(Os::Windows),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Aarch64,
}

impl Arch {
    pub fn parse(arch: &str) -> Option<Self> {
        match arch.to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" => Some(Arch::X86_64),
            "arm64" | "aarch64" => Some(Arch::Aarch64),
            _ => None,
        }
    }
}

/// Platforms that have a prebuilt wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformTag {
    LinuxX86_64,
    MacOSArm64,
    WindowsX64,
}

pub const SUPPORTED_PLATFORMS: [PlatformTag; 3] = [
    PlatformTag::LinuxX86_64,
    PlatformTag::MacOSArm64,
    PlatformTag::WindowsX64,
];

impl PlatformTag {
    /// Platform part of the wheel filename, including the extension
    pub fn wheel_suffix(&self) -> &'static str {
        match self {
            PlatformTag::LinuxX86_64 => "manylinux_2_39_x86_64.whl",
            PlatformTag::MacOSArm64 => "macosx_11_0_arm64.whl",
            PlatformTag::WindowsX64 => "win_amd64.whl",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlatformTag::LinuxX86_64 => "Linux x86_64",
            PlatformTag::MacOSArm64 => "macOS arm64",
            PlatformTag::WindowsX64 => "Windows x64",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Maps an OS/architecture pair to the wheel built for it
pub fn resolve_platform(os: &str, arch: &str) -> Result<PlatformTag> {
    match (Os::parse(os), Arch::parse(arch)) {
        (Some(Os::Linux), Some(Arch::X86_64)) => Ok(PlatformTag::LinuxX86_64),
        (Some(Os::MacOS), Some(Arch::Aarch64)) => Ok(PlatformTag::MacOSArm64),
        (Some(Os::Windows), Some(Arch::X86_64)) => Ok(PlatformTag::WindowsX64),
        _ => Err(DailybpyError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        }),
    }
}

pub fn detect_platform() -> Result<PlatformTag> {
    resolve_platform(std::env::consts::OS, std::env::consts::ARCH)
}
