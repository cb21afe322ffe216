use crate::core::error::Error;

/// Always fails; exercises the process-wide error policy.
pub(crate) async fn fail() -> Result<String, Error> {
    Err(Error::Other(String::from("Ups")))
}
