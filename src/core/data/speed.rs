use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const MIN_SETTING: u32 = 1;
pub const MAX_SETTING: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpeedError {
    SettingOutOfRange { setting: u32 },
}

impl fmt::Display for SpeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SettingOutOfRange { setting } => {
                write!(
                    f,
                    "speed setting must be between {} and {}, got {}",
                    MIN_SETTING, MAX_SETTING, setting
                )
            }
        }
    }
}

impl Error for SpeedError {}

/// User-facing speed setting, inversely mapped to the inter-step delay:
/// setting 1 pauses 100ms per full step, setting 100 pauses 1ms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Speed {
    setting: u32,
}

impl Speed {
    pub fn new(setting: u32) -> Result<Self, SpeedError> {
        if !(MIN_SETTING..=MAX_SETTING).contains(&setting) {
            return Err(SpeedError::SettingOutOfRange { setting });
        }

        Ok(Self { setting })
    }

    #[must_use]
    pub fn setting(&self) -> u32 {
        self.setting
    }

    #[must_use]
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(u64::from(MAX_SETTING + 1 - self.setting))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self { setting: 50 }
    }
}

/// How much of the base delay a step consumes. Comparisons and per-pass
/// sorted marks pause half a step; the final sweep after merge and quick
/// runs at a fifth; bubble and insertion finish their sweep instantly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pace {
    Full,
    Half,
    Fifth,
    Instant,
}

impl Pace {
    #[must_use]
    pub fn scaled(self, base: Duration) -> Duration {
        match self {
            Self::Full => base,
            Self::Half => base / 2,
            Self::Fifth => base / 5,
            Self::Instant => Duration::ZERO,
        }
    }
}
