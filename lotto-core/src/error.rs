use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Draw already in progress")]
    DrawInProgress,

    #[error("Inputs are locked while the draw is revealing")]
    InputsLocked,

    #[error("Ball position out of range: {0}")]
    PositionOutOfRange(usize),
}
