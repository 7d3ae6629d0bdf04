//! Saved-game format and the file store that holds it.

mod codec;
mod store;

pub use codec::{deserialize, serialize, SavedGame};
pub use store::{SaveStore, SaveStoreConfig};
