use thiserror::Error;

#[derive(Debug, Error)]
pub enum BurrowError {
    #[error("directory error: {0}")]
    Dir(#[from] burrow_dirs::DirError),

    #[error("bitfield error: {0}")]
    Bits(#[from] burrow_bits::BitsError),

    #[error("store error: {0}")]
    Store(#[from] burrow_store::StoreError),
}

pub type BurrowResult<T> = Result<T, BurrowError>;
