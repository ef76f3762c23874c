//! Game configuration options.

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_suit_up(true)
///     .with_round_cap(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the "suit up" house rule is enabled.
    pub suit_up: bool,
    /// Hard bound on top-level rounds before the game aborts.
    pub round_cap: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            suit_up: false,
            round_cap: 10_000,
        }
    }
}

impl GameOptions {
    /// Enables or disables the "suit up" house rule.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_suit_up(true);
    /// assert!(options.suit_up);
    /// ```
    #[must_use]
    pub const fn with_suit_up(mut self, enabled: bool) -> Self {
        self.suit_up = enabled;
        self
    }

    /// Sets the round cap.
    ///
    /// Real games finish far below the default of 10 000 rounds; reaching the
    /// cap is reported as an error, not a normal outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_cap(500);
    /// assert_eq!(options.round_cap, 500);
    /// ```
    #[must_use]
    pub const fn with_round_cap(mut self, cap: usize) -> Self {
        self.round_cap = cap;
        self
    }
}
