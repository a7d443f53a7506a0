//! The presence synchronizer: one boolean of state and one transmit path.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::module::{GameState, Module};
use crate::presence::{Activity, PresenceClient};
use crate::settings::PresenceSettings;

/// Discord application id for the Lodestone client.
const DISCORD_APP_ID: i64 = 1296531441189327874;

/// Asset key for the large client logo.
const LARGE_IMAGE_KEY: &str = "lodestone";

/// Asset key and tooltip for the small badge.
const SMALL_IMAGE_KEY: &str = "compass";
const SMALL_IMAGE_TEXT: &str = "lodestone-client";

/// Fixed state line shown while in a game session.
const IN_GAME_STATE: &str = "In a game session.";

/// Tracks in-game versus in-menu and mirrors that to Discord.
///
/// Transmissions happen on activation (forced) and on any tick where the
/// sampled in-game flag differs from the value at the last transmission.
pub struct PresenceModule {
    client: Box<dyn PresenceClient>,
    settings: PresenceSettings,
    activity: Activity,
    last_in_game: bool,
}

impl PresenceModule {
    pub fn new(client: Box<dyn PresenceClient>, settings: PresenceSettings) -> Self {
        Self {
            client,
            settings,
            activity: Activity::new(),
            last_in_game: false,
        }
    }

    fn update(&mut self, game: &dyn GameState, force: bool) {
        let in_game = game.in_game();

        if in_game == self.last_in_game && !force {
            return;
        }

        if in_game {
            self.activity.set_details(&self.settings.in_game_details);
            self.activity.set_state(IN_GAME_STATE);
        } else {
            self.activity.set_details(crate::branding_line());
            self.activity.set_state(&self.settings.main_menu_state);
        }

        tracing::debug!(in_game, force, "transmitting presence");
        self.client.set_activity(&self.activity);
        self.last_in_game = in_game;
    }
}

impl Module for PresenceModule {
    fn name(&self) -> &'static str {
        "discord-presence"
    }

    fn description(&self) -> &'static str {
        "Shows what you are doing in Discord."
    }

    fn on_activate(&mut self, game: &dyn GameState) {
        if let Err(e) = self.client.start(DISCORD_APP_ID) {
            tracing::warn!("failed to start {} presence client: {e}", self.client.name());
        }

        let start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.activity.set_start(start);
        self.activity
            .set_large_image(LARGE_IMAGE_KEY, crate::build_line());
        self.activity
            .set_small_image(SMALL_IMAGE_KEY, SMALL_IMAGE_TEXT);

        self.update(game, true);
    }

    fn on_deactivate(&mut self) {
        self.client.stop();
    }

    fn on_tick(&mut self, game: &dyn GameState) {
        self.update(game, false);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::PresenceError;

    struct InGame(bool);

    impl GameState for InGame {
        fn in_game(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct Recorded {
        starts: u32,
        stops: u32,
        transmissions: Vec<Activity>,
    }

    #[derive(Clone, Default)]
    struct FakeClient(Arc<Mutex<Recorded>>);

    impl PresenceClient for FakeClient {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn start(&mut self, _app_id: i64) -> Result<(), PresenceError> {
            self.0.lock().unwrap().starts += 1;
            Ok(())
        }

        fn set_activity(&mut self, activity: &Activity) {
            self.0.lock().unwrap().transmissions.push(activity.clone());
        }

        fn stop(&mut self) {
            self.0.lock().unwrap().stops += 1;
        }
    }

    fn module() -> (PresenceModule, FakeClient) {
        let client = FakeClient::default();
        let module = PresenceModule::new(Box::new(client.clone()), PresenceSettings::default());
        (module, client)
    }

    #[test]
    fn activation_forces_a_transmission() {
        let (mut module, client) = module();

        // The sampled value matches the initial internal state, so only the
        // force flag makes this transmit.
        module.on_activate(&InGame(false));

        let recorded = client.0.lock().unwrap();
        assert_eq!(recorded.starts, 1);
        assert_eq!(recorded.transmissions.len(), 1);
    }

    #[test]
    fn menu_transmission_uses_branding_and_configured_state() {
        let (mut module, client) = module();
        module.on_activate(&InGame(false));

        let recorded = client.0.lock().unwrap();
        let sent = &recorded.transmissions[0];
        assert_eq!(sent.details(), Some(crate::branding_line().as_str()));
        assert_eq!(
            sent.state(),
            Some(PresenceSettings::default().main_menu_state.as_str())
        );
        assert!(sent.start().is_some());
        assert_eq!(sent.large_image().unwrap().key, "lodestone");
        assert_eq!(sent.small_image().unwrap().key, "compass");
    }

    #[test]
    fn in_game_transmission_uses_configured_details_and_fixed_state() {
        let settings = PresenceSettings {
            in_game_details: "Mining obsidian.".into(),
            ..PresenceSettings::default()
        };
        let client = FakeClient::default();
        let mut module = PresenceModule::new(Box::new(client.clone()), settings);

        module.on_activate(&InGame(true));

        let recorded = client.0.lock().unwrap();
        let sent = &recorded.transmissions[0];
        assert_eq!(sent.details(), Some("Mining obsidian."));
        assert_eq!(sent.state(), Some(IN_GAME_STATE));
    }

    #[test]
    fn ticks_transmit_only_on_change() {
        let (mut module, client) = module();

        module.on_activate(&InGame(false));
        module.on_tick(&InGame(false));
        module.on_tick(&InGame(false));
        assert_eq!(client.0.lock().unwrap().transmissions.len(), 1);

        module.on_tick(&InGame(true));
        assert_eq!(client.0.lock().unwrap().transmissions.len(), 2);

        module.on_tick(&InGame(true));
        assert_eq!(client.0.lock().unwrap().transmissions.len(), 2);

        module.on_tick(&InGame(false));
        assert_eq!(client.0.lock().unwrap().transmissions.len(), 3);
    }

    #[test]
    fn menu_then_game_then_steady_scenario() {
        let (mut module, client) = module();

        module.on_activate(&InGame(false));
        {
            let recorded = client.0.lock().unwrap();
            assert_eq!(recorded.transmissions.len(), 1);
            assert_eq!(
                recorded.transmissions[0].details(),
                Some(crate::branding_line().as_str())
            );
        }

        module.on_tick(&InGame(true));
        {
            let recorded = client.0.lock().unwrap();
            assert_eq!(recorded.transmissions.len(), 2);
            assert_eq!(recorded.transmissions[1].state(), Some(IN_GAME_STATE));
        }

        module.on_tick(&InGame(true));
        assert_eq!(client.0.lock().unwrap().transmissions.len(), 2);
    }

    #[test]
    fn deactivation_stops_the_client_once() {
        let (mut module, client) = module();

        module.on_activate(&InGame(false));
        module.on_deactivate();

        let recorded = client.0.lock().unwrap();
        assert_eq!(recorded.stops, 1);
    }
}
