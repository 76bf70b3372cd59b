//! Storage layer abstraction trait definition

mod flash_store;
mod property_store;

pub use flash_store::{FlashStore, InMemoryFlashStore, RESET_PASSWORD_FLASH};
pub use property_store::{InMemoryPropertyStore, PropertyStore};

// Remote panel seam, implemented by `keyhelp_client::KeyhelpClient`
pub use keyhelp_client::PanelApi;
