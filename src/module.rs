//! Seam to the host mod-loading framework.
//!
//! The mod loader owns module lifecycles: it calls [`Module::on_activate`]
//! when the user enables a module, drives [`Module::on_tick`] from the game
//! loop, and calls [`Module::on_deactivate`] when the module is disabled or
//! the client shuts down.

/// Read-only view of the game the host exposes to modules.
pub trait GameState {
    /// Whether an active game session is running, as opposed to the main
    /// menu or another idle screen.
    fn in_game(&self) -> bool;
}

/// A module managed by the host framework.
pub trait Module {
    /// Short identifier used in module lists and logs.
    fn name(&self) -> &'static str;

    /// One-line description shown in the module UI.
    fn description(&self) -> &'static str;

    /// Called once when the module is enabled.
    fn on_activate(&mut self, game: &dyn GameState);

    /// Called once when the module is disabled.
    fn on_deactivate(&mut self);

    /// Called on every game tick while the module is active.
    fn on_tick(&mut self, game: &dyn GameState);
}
