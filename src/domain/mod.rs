pub mod models;
mod pairing;
mod standings;

pub use models::*;
pub use pairing::swiss_pairings;
pub use standings::Standings;
