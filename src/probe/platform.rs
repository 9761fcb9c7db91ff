//! Platform-conditional probe command construction

/// Host platform family, as far as echo-utility argument syntax cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows-family `ping` (`-n <count>`)
    Windows,
    /// Everything else (`-c <count>`)
    Unix,
}

impl Platform {
    /// Detect the platform the binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Build the argument vector for a single echo request against `address`.
///
/// Pure function of the platform, so command selection is testable without
/// spawning anything. The count flag is the only platform difference; the
/// overall probe bound is enforced by the caller, not by a utility flag.
pub fn echo_args(platform: Platform, address: &str) -> Vec<String> {
    match platform {
        Platform::Windows => vec!["-n".to_string(), "1".to_string(), address.to_string()],
        Platform::Unix => vec!["-c".to_string(), "1".to_string(), address.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_echo_args() {
        assert_eq!(
            echo_args(Platform::Windows, "8.8.8.8"),
            vec!["-n", "1", "8.8.8.8"]
        );
    }

    #[test]
    fn test_unix_echo_args() {
        assert_eq!(
            echo_args(Platform::Unix, "example.com"),
            vec!["-c", "1", "example.com"]
        );
    }

    #[test]
    fn test_address_is_passed_verbatim() {
        // Addresses are opaque tokens; no quoting or validation happens here.
        let args = echo_args(Platform::Unix, "  odd token  ");
        assert_eq!(args[2], "  odd token  ");
    }

    #[test]
    fn test_current_platform_matches_build_target() {
        let platform = Platform::current();
        if cfg!(windows) {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, Platform::Unix);
        }
    }
}
