//! # Pair State Controller
//!
//! Owns the widget's single [`PairState`] and keeps the "To" amount derived from the
//! "From" amount and the two selected tokens.
//!
//! ## Recomputation
//!
//! Every mutation except [`PairController::flip`] recomputes `dest_amount` through the
//! [`QuoteEngine`] before returning. There is no debouncing and no background work.
//!
//! ## Flip
//!
//! `flip` exchanges the four fields directly: tokens trade places and so do the two
//! amounts. The quote engine is not consulted, so right after a flip `dest_amount`
//! holds the previous "From" text rather than a fresh quote. The next edit brings it
//! back in line; [`PairController::is_stale`] reports the gap.

use shared::utils::strip_thousands_separators;
use tracing::debug;

use crate::quote::{PriceLine, QuoteEngine};
use crate::registry::Token;

/// One side of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// "From": typed by the user.
    Source,
    /// "To": read-only, derived.
    Destination,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Source => "From",
            Side::Destination => "To",
        }
    }

    /// Whether the amount field on this side accepts input.
    pub fn is_editable(&self) -> bool {
        matches!(self, Side::Source)
    }
}

/// Current selection and amounts. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PairState {
    pub source_token: Token,
    pub dest_token: Token,
    pub source_amount: String,
    pub dest_amount: String,
}

impl PairState {
    pub fn token(&self, side: Side) -> &Token {
        match side {
            Side::Source => &self.source_token,
            Side::Destination => &self.dest_token,
        }
    }

    pub fn amount(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_amount,
            Side::Destination => &self.dest_amount,
        }
    }
}

/// Keeps a [`PairState`] consistent with the quote engine.
#[derive(Debug, Clone)]
pub struct PairController {
    engine: QuoteEngine,
    state: PairState,
}

impl PairController {
    /// Create the pair with `dest_amount` already quoted.
    pub fn new(engine: QuoteEngine, source_token: Token, dest_token: Token, source_amount: &str) -> Self {
        let mut controller = Self {
            engine,
            state: PairState {
                source_token,
                dest_token,
                source_amount: source_amount.to_string(),
                dest_amount: String::new(),
            },
        };
        controller.recompute();
        controller
    }

    pub fn state(&self) -> &PairState {
        &self.state
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    fn expected_dest_amount(&self) -> String {
        self.engine.quote(
            &self.state.source_amount,
            &self.state.source_token.symbol,
            &self.state.dest_token.symbol,
        )
    }

    fn recompute(&mut self) {
        self.state.dest_amount = self.expected_dest_amount();
        debug!(
            source = %self.state.source_token.symbol,
            dest = %self.state.dest_token.symbol,
            source_amount = %self.state.source_amount,
            dest_amount = %self.state.dest_amount,
            "Quote recomputed"
        );
    }

    /// Store the typed "From" amount and requote.
    pub fn set_source_amount(&mut self, amount: &str) {
        self.state.source_amount = amount.to_string();
        self.recompute();
    }

    /// Replace the "From" token and requote. The "To" token is left alone even if
    /// it is now the same token.
    pub fn set_source_token(&mut self, token: Token) {
        self.state.source_token = token;
        self.recompute();
    }

    /// Replace the "To" token and requote.
    pub fn set_dest_token(&mut self, token: Token) {
        self.state.dest_token = token;
        self.recompute();
    }

    /// Token picker entry point for either side.
    pub fn select_token(&mut self, side: Side, token: Token) {
        match side {
            Side::Source => self.set_source_token(token),
            Side::Destination => self.set_dest_token(token),
        }
    }

    /// Exchange source and destination roles, field for field, without requoting.
    pub fn flip(&mut self) {
        let state = &mut self.state;
        std::mem::swap(&mut state.source_token, &mut state.dest_token);
        std::mem::swap(&mut state.source_amount, &mut state.dest_amount);
        debug!(
            source = %state.source_token.symbol,
            dest = %state.dest_token.symbol,
            "Pair flipped"
        );
    }

    /// Copy the "From" token's balance into the "From" amount and requote.
    ///
    /// Returns `false` (and changes nothing) when the token has no balance.
    pub fn set_max_from_balance(&mut self) -> bool {
        self.set_max_for(Side::Source)
    }

    /// Copy a side's token balance into that side's amount.
    ///
    /// Only editable sides accept it; the read-only "To" side always returns `false`.
    pub fn set_max_for(&mut self, side: Side) -> bool {
        if !side.is_editable() {
            return false;
        }

        let balance = match &self.state.token(side).balance {
            Some(balance) => strip_thousands_separators(balance),
            None => return false,
        };

        self.set_source_amount(&balance);
        true
    }

    /// Whether `dest_amount` differs from a fresh quote (only possible right after a flip).
    pub fn is_stale(&self) -> bool {
        self.state.dest_amount != self.expected_dest_amount()
    }

    /// Price row for the current pair.
    pub fn price_line(&self) -> Option<PriceLine> {
        self.engine
            .price_line(&self.state.source_token.symbol, &self.state.dest_token.symbol)
    }
}
