pub mod aggregate;

pub use aggregate::{ServiceDraft, ServicePayload};
