#[derive(Debug, thiserror::Error)]
pub enum StakeError {
    #[error("delegateBalance must be greater than or equal to 1 TRX")]
    DelegateLessThanMin,
    #[error("undelegateBalance must be greater than or equal to 1 TRX")]
    UnDelegateLessThanMin,
    #[error("No withdrawable amount available")]
    NoWithdrawableAmount,
    #[error("delegate record not confirmed yet")]
    RecordNotConfirmed,
    #[error("delegate record already reclaimed")]
    RecordReclaimed,
}

impl StakeError {
    pub(crate) fn get_status_code(&self) -> i64 {
        match self {
            StakeError::DelegateLessThanMin => 3900,
            StakeError::UnDelegateLessThanMin => 3901,
            StakeError::NoWithdrawableAmount => 3902,
            StakeError::RecordNotConfirmed => 3903,
            StakeError::RecordReclaimed => 3904,
        }
    }
}
