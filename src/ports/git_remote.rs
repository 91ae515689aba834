use crate::domain::AppError;

pub trait GitRemote {
    /// URL configured for the `origin` remote.
    fn origin_url(&self) -> Result<String, AppError>;
}
