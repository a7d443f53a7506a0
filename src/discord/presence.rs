//! Discord Rich Presence transport using discord-sdk.

use std::thread::JoinHandle;
use std::time::{Duration, SystemTime};

use discord_sdk::{
    activity::{ActivityBuilder, Assets},
    wheel::{UserState, Wheel},
    Discord, Subscriptions,
};
use tokio::sync::mpsc;

use crate::error::PresenceError;
use crate::presence::{Activity, PresenceClient};

/// Timeout for waiting for the Discord handshake.
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Presence transport backed by the local Discord client's IPC socket.
///
/// The connection lives on a dedicated worker thread so the host's tick
/// callback never blocks on IPC. Updates are pushed through an unbounded
/// channel; closing the channel shuts the worker down.
pub struct DiscordClient {
    update_tx: Option<mpsc::UnboundedSender<Activity>>,
    worker: Option<JoinHandle<()>>,
}

impl DiscordClient {
    pub fn new() -> Self {
        Self {
            update_tx: None,
            worker: None,
        }
    }
}

impl Default for DiscordClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceClient for DiscordClient {
    fn name(&self) -> &'static str {
        "Discord"
    }

    fn start(&mut self, app_id: i64) -> Result<(), PresenceError> {
        if self.update_tx.is_some() {
            return Err(PresenceError::AlreadyStarted);
        }

        let (update_tx, update_rx) = mpsc::unbounded_channel();

        let worker = std::thread::Builder::new()
            .name("discord-presence".to_string())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        tracing::warn!("failed to build presence runtime: {e}");
                        return;
                    }
                };
                rt.block_on(run_discord_task(app_id, update_rx));
            })
            .map_err(PresenceError::WorkerSpawn)?;

        self.update_tx = Some(update_tx);
        self.worker = Some(worker);
        Ok(())
    }

    fn set_activity(&mut self, activity: &Activity) {
        // A closed channel means Discord was never reachable; nothing to do.
        if let Some(ref tx) = self.update_tx {
            let _ = tx.send(activity.clone());
        }
    }

    fn stop(&mut self) {
        // Dropping the sender closes the channel; the worker disconnects
        // from Discord and exits.
        self.update_tx = None;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Background task that maintains the Discord connection and processes
/// presence updates until the channel closes.
async fn run_discord_task(app_id: i64, mut update_rx: mpsc::UnboundedReceiver<Activity>) {
    let (wheel, handler) = Wheel::new(Box::new(|err| {
        tracing::warn!("Discord error: {:?}", err);
    }));

    let mut user_spoke = wheel.user();

    let discord = match Discord::new(app_id, Subscriptions::ACTIVITY, Box::new(handler)) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Discord not available: {:?}", e);
            return;
        }
    };

    tracing::info!("Discord connecting...");

    let user = match tokio::time::timeout(HANDSHAKE_TIMEOUT, async {
        if user_spoke.0.changed().await.is_err() {
            Err("Discord connection closed".to_string())
        } else {
            match &*user_spoke.0.borrow() {
                UserState::Connected(user) => Ok(user.clone()),
                UserState::Disconnected(err) => Err(format!("Discord disconnected: {:?}", err)),
            }
        }
    })
    .await
    {
        Ok(Ok(user)) => user,
        Ok(Err(e)) => {
            tracing::warn!("{}", e);
            return;
        }
        Err(_) => {
            tracing::warn!("Discord handshake timed out");
            return;
        }
    };

    tracing::info!(
        "Discord Rich Presence connected as {}#{}",
        user.username,
        user.discriminator.unwrap_or(0)
    );

    while let Some(activity) = update_rx.recv().await {
        if let Err(e) = discord.update_activity(build_activity(&activity)).await {
            tracing::debug!("Failed to update Discord activity: {:?}", e);
        }
    }

    discord.disconnect().await;
    tracing::info!("Discord Rich Presence disconnected");
}

fn build_activity(activity: &Activity) -> ActivityBuilder {
    let mut builder = ActivityBuilder::new();

    if let Some(details) = activity.details() {
        builder = builder.details(details);
    }
    if let Some(state) = activity.state() {
        builder = builder.state(state);
    }

    let mut assets = Assets::default();
    if let Some(image) = activity.large_image() {
        assets = assets.large(&image.key, Some(&image.text));
    }
    if let Some(image) = activity.small_image() {
        assets = assets.small(&image.key, Some(&image.text));
    }
    builder = builder.assets(assets);

    if let Some(start) = activity.start() {
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(start);
        builder = builder.timestamps(Some(start), None::<SystemTime>);
    }

    builder
}
