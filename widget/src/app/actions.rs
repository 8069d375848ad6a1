//! User intents collected while a frame renders and applied once it finishes.

use lib_swap::settings::Provider;
use lib_swap::Side;

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// "From" amount text changed
    SetAmount(String),
    /// Token picked for a side, by symbol
    SelectToken(Side, String),
    Flip,
    /// Use the "From" token's whole balance
    Max,
    /// Connect wallet or swap, whichever the button currently says
    Primary,
    Disconnect,
    ToggleSettings,
    SlippagePreset(u16),
    /// Typed slippage percentage
    CustomSlippage(String),
    /// Typed deadline minutes
    Deadline(String),
    SelectProvider(Provider),
}
