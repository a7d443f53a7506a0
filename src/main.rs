//! Demo driver: simulates the host's tick loop against a live Discord client.
//!
//! Run with Discord open; the presence flips between menu and in-game every
//! fifteen seconds.

use std::time::{Duration, Instant};

use lodestone_presence::discord::DiscordClient;
use lodestone_presence::module::{GameState, Module};
use lodestone_presence::presence::PresenceModule;
use lodestone_presence::{logging, settings};

/// Pretends a session starts 15 seconds in and ends at 45.
struct SimulatedGame {
    started: Instant,
}

impl GameState for SimulatedGame {
    fn in_game(&self) -> bool {
        let elapsed = self.started.elapsed().as_secs();
        (15..45).contains(&elapsed)
    }
}

fn main() {
    let _guard = logging::init_logging();

    let settings = match settings::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("falling back to default settings: {e}");
            settings::PresenceSettings::default()
        }
    };

    let game = SimulatedGame {
        started: Instant::now(),
    };
    let mut module = PresenceModule::new(Box::new(DiscordClient::new()), settings);

    tracing::info!("activating {}", module.name());
    module.on_activate(&game);

    let deadline = Instant::now() + Duration::from_secs(60);
    while Instant::now() < deadline {
        module.on_tick(&game);
        std::thread::sleep(Duration::from_millis(50));
    }

    tracing::info!("deactivating {}", module.name());
    module.on_deactivate();
}
