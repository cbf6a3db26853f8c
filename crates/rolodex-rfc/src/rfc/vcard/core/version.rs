//! Format major version resolution.

/// The major version of the output format (2, 3 or 4).
///
/// Every version-conditional rule compares against this value. An unknown
/// version (from a malformed display string) compares false against every
/// threshold, so it selects the legacy branch of each rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MajorVersion(Option<u32>);

impl MajorVersion {
    pub const V2: Self = Self(Some(2));
    pub const V3: Self = Self(Some(3));
    pub const V4: Self = Self(Some(4));
    pub const UNKNOWN: Self = Self(None);

    #[must_use]
    pub const fn new(major: u32) -> Self {
        Self(Some(major))
    }

    /// Resolves a display version such as `"3.0"` to its major version.
    ///
    /// The part before the first `.` is parsed as an integer. Anything else
    /// (empty, non-numeric) resolves to [`MajorVersion::UNKNOWN`].
    #[must_use]
    pub fn resolve(display: &str) -> Self {
        let major = display.split('.').next().unwrap_or_default().trim();
        Self(major.parse().ok())
    }

    #[must_use]
    pub const fn get(self) -> Option<u32> {
        self.0
    }

    /// `version >= major`
    #[must_use]
    pub fn is_at_least(self, major: u32) -> bool {
        self.0.is_some_and(|v| v >= major)
    }

    /// `version > major`
    #[must_use]
    pub fn exceeds(self, major: u32) -> bool {
        self.0.is_some_and(|v| v > major)
    }

    /// `version == major`
    #[must_use]
    pub fn is(self, major: u32) -> bool {
        self.0 == Some(major)
    }

    /// Parameter fragment appended to text-bearing properties.
    ///
    /// Empty from version 4 on, `;CHARSET=utf-8` otherwise.
    #[must_use]
    pub fn charset_suffix(self) -> &'static str {
        if self.is_at_least(4) {
            ""
        } else {
            rolodex_core::constants::CHARSET_SUFFIX
        }
    }
}

impl std::fmt::Display for MajorVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(major) => write!(f, "{major}"),
            None => f.write_str("unknown"),
        }
    }
}
