use strum_macros::AsRefStr;

pub type ModelResult<T> = core::result::Result<T, ModelError>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum ModelError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    ParticipantNotFound { activity: String, email: String },
}
