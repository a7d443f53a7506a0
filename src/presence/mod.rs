mod activity;
mod module;
mod traits;

pub use activity::{Activity, ImageAsset};
pub use module::PresenceModule;
pub use traits::PresenceClient;
