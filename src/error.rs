#[derive(Debug, thiserror::Error)]
pub enum Error {
    //
    // System error
    //
    #[error(transparent)]
    UnknownIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
