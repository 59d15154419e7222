pub mod executor;
pub mod policy_api_client;
pub mod session;

pub use executor::ImportExecutor;
pub use policy_api_client::{PolicyApi, PolicyApiClient};
pub use session::{ImportSession, SessionState};
