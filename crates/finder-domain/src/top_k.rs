//! Top K module - bounded result count

use std::fmt;

/// Number of results to request from the recommendation service.
///
/// Always within `TopK::MIN..=TopK::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopK(u32);

impl TopK {
    /// Smallest accepted value
    pub const MIN: u32 = 1;

    /// Largest accepted value
    pub const MAX: u32 = 20;

    /// Value used when nothing is configured
    pub const DEFAULT: TopK = TopK(10);

    /// Validate a result count
    pub fn new(value: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// The raw count
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TopK {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid result count: {}", s))?;
        Self::new(value).ok_or_else(|| {
            format!(
                "Result count must be between {} and {}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}
