pub mod email_subscriber;
pub mod reflection;
pub mod session_request;
pub mod volume;

pub use email_subscriber::{CreateEmailSubscriber, EmailSubscriber};
pub use reflection::{CreateReflection, Reflection};
pub use session_request::{CreateSessionRequest, SessionRequest, SessionStatus};
pub use volume::{CreateVolume, Volume};
