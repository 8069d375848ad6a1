//! # Swap Settings
//!
//! Cosmetic settings panel state: slippage tolerance, transaction deadline and the
//! routing provider. The values are displayed and echoed in notifications; nothing
//! enforces them.

use std::fmt;

use crate::error::{Result, SwapError};

/// Predefined slippage options in basis points
pub const SLIPPAGE_PRESETS_BPS: &[u16] = &[
    10,  // 0.1%
    50,  // 0.5%
    100, // 1.0%
];

pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Upper bound for a custom slippage value (50%).
pub const MAX_SLIPPAGE_BPS: u16 = 5_000;

pub const DEFAULT_DEADLINE_MINUTES: u32 = 20;

pub const MIN_DEADLINE_MINUTES: u32 = 1;

/// Convert slippage basis points to percentage string
///
/// Whole tenths keep one decimal (`50` → `"0.5%"`, `100` → `"1.0%"`), finer values
/// keep two (`25` → `"0.25%"`).
pub fn bps_to_percent_str(bps: u16) -> String {
    let percent = (bps as f64) / 100.0;
    if bps % 10 == 0 {
        format!("{:.1}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

/// Routing provider shown under the swap button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Okx,
    UniswapV2,
}

impl Provider {
    pub fn all() -> &'static [Provider] {
        &[Provider::Okx, Provider::UniswapV2]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Provider::Okx => "OKX",
            Provider::UniswapV2 => "Uniswap V2",
        }
    }

    /// The provider offered as the "Or try" alternative.
    pub fn alternative(&self) -> Provider {
        match self {
            Provider::Okx => Provider::UniswapV2,
            Provider::UniswapV2 => Provider::Okx,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings panel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapSettings {
    slippage_bps: u16,
    deadline_minutes: u32,
    provider: Provider,
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            deadline_minutes: DEFAULT_DEADLINE_MINUTES,
            provider: Provider::default(),
        }
    }
}

impl SwapSettings {
    pub fn slippage_bps(&self) -> u16 {
        self.slippage_bps
    }

    pub fn slippage_label(&self) -> String {
        bps_to_percent_str(self.slippage_bps)
    }

    /// Whether the current slippage is one of the presets.
    pub fn is_preset_slippage(&self) -> bool {
        SLIPPAGE_PRESETS_BPS.contains(&self.slippage_bps)
    }

    pub fn select_slippage_preset(&mut self, bps: u16) -> Result<()> {
        if !SLIPPAGE_PRESETS_BPS.contains(&bps) {
            return Err(SwapError::Validation(format!(
                "{} is not a slippage preset",
                bps_to_percent_str(bps)
            )));
        }
        self.slippage_bps = bps;
        Ok(())
    }

    /// Set slippage from a typed percentage such as `"0.75"`.
    ///
    /// Accepts `0` through `50`; the value is kept in whole basis points.
    pub fn set_custom_slippage(&mut self, percent: &str) -> Result<()> {
        let value = percent
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SwapError::Validation(format!("Slippage '{}' is not a number", percent.trim())))?;

        let bps = (value * 100.0).round();
        if bps < 0.0 || bps > MAX_SLIPPAGE_BPS as f64 {
            return Err(SwapError::Validation(
                "Slippage must be between 0 and 50 percent".to_string(),
            ));
        }

        self.slippage_bps = bps as u16;
        Ok(())
    }

    pub fn deadline_minutes(&self) -> u32 {
        self.deadline_minutes
    }

    /// Set the deadline from typed minutes. At least one minute.
    pub fn set_deadline(&mut self, minutes: &str) -> Result<()> {
        let minutes = minutes
            .trim()
            .parse::<u32>()
            .map_err(|_| SwapError::Validation(format!("Deadline '{}' is not a whole number of minutes", minutes.trim())))?;

        if minutes < MIN_DEADLINE_MINUTES {
            return Err(SwapError::Validation(format!(
                "Deadline must be at least {} minute",
                MIN_DEADLINE_MINUTES
            )));
        }

        self.deadline_minutes = minutes;
        Ok(())
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }
}
