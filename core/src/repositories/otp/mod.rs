#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockOtpRepository;
pub use trait_::{ActivationEffect, OtpRepository};
