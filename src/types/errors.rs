use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("Channel error: unknown channel '{0}' (expected Online, In-store or All)")]
    Unknown(String)
}
