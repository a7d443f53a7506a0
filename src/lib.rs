//! Discord Rich Presence module for the Lodestone client.
//!
//! The host mod loader drives a [`module::Module`] lifecycle; on each tick the
//! presence module compares the in-game flag against the last transmitted
//! value and pushes an updated status to the local Discord client when it
//! changed.

pub mod discord;
pub mod error;
pub mod logging;
pub mod module;
pub mod presence;
pub mod settings;

/// Client name shown in presence branding.
pub const CLIENT_NAME: &str = "Lodestone";

/// Client version, taken from the crate version at compile time.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CI build number, when one was compiled in.
pub const BUILD_NUMBER: Option<&str> = option_env!("LODESTONE_BUILD_NUMBER");

/// Branding line used for the in-menu details field.
pub fn branding_line() -> String {
    format!("{CLIENT_NAME} {CLIENT_VERSION}")
}

/// Branding line for the large image tooltip, with the build number appended
/// when one is available.
pub fn build_line() -> String {
    match BUILD_NUMBER {
        Some(build) if !build.is_empty() => {
            format!("{CLIENT_NAME} {CLIENT_VERSION} Build: {build}")
        }
        _ => branding_line(),
    }
}
