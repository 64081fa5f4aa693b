use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use energy_chain_interact::tron::StakeOperation;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// Chain-side effects of the flow, behind a trait so the state machine
/// can be driven by a fake in tests.
#[async_trait::async_trait]
pub trait StakeOps: Send + Sync {
    async fn execute(&self, operation: &StakeOperation) -> Result<String, crate::ServiceError>;

    // estimated fee in trx
    async fn estimate_fee(&self, operation: &StakeOperation) -> Result<f64, crate::ServiceError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Validating,
    Confirming,
    Submitting,
    Succeeded { tx_hash: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeeState {
    Pending,
    Ready(f64),
    // estimate failed, retry_fee re-runs the query
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    Submitted { tx_hash: String },
    // confirm arrived while a submission was already in flight
    Ignored,
    Failed { message: String },
}

struct Inner {
    state: Mutex<SubmitState>,
    prepared: Mutex<Option<StakeOperation>>,
    fee: Mutex<FeeState>,
    fee_task: Mutex<Option<JoinHandle<()>>>,
    loading: AtomicBool,
    ops: Arc<dyn StakeOps>,
    refresh_tx: mpsc::UnboundedSender<()>,
}

/// Orchestrates validate → confirm → submit for one stake operation at
/// a time. Completed submissions push a refresh event so callers can
/// reload balances and record lists.
#[derive(Clone)]
pub struct SubmitFlow {
    inner: Arc<Inner>,
}

impl SubmitFlow {
    pub fn new(ops: Arc<dyn StakeOps>) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let flow = Self {
            inner: Arc::new(Inner {
                state: Mutex::new(SubmitState::Idle),
                prepared: Mutex::new(None),
                fee: Mutex::new(FeeState::Pending),
                fee_task: Mutex::new(None),
                loading: AtomicBool::new(false),
                ops,
                refresh_tx,
            }),
        };
        (flow, refresh_rx)
    }

    pub async fn state(&self) -> SubmitState {
        self.inner.state.lock().await.clone()
    }

    pub async fn fee(&self) -> FeeState {
        self.inner.fee.lock().await.clone()
    }

    /// Runs the supplied field checks, and on success packages the
    /// operation and moves to the confirmation step. The fee estimate
    /// runs as a side query that never blocks confirmation.
    pub async fn start(
        &self,
        operation: StakeOperation,
        checks: Vec<Result<(), String>>,
    ) -> Result<(), String> {
        {
            let mut state = self.inner.state.lock().await;
            *state = SubmitState::Validating;

            if let Some(Err(message)) = checks.into_iter().find(|check| check.is_err()) {
                *state = SubmitState::Idle;
                return Err(message);
            }

            *state = SubmitState::Confirming;
        }

        *self.inner.prepared.lock().await = Some(operation.clone());
        self.spawn_fee_query(operation).await;

        Ok(())
    }

    async fn spawn_fee_query(&self, operation: StakeOperation) {
        let mut fee_task = self.inner.fee_task.lock().await;
        if let Some(task) = fee_task.take() {
            task.abort();
        }

        *self.inner.fee.lock().await = FeeState::Pending;

        let inner = Arc::clone(&self.inner);
        *fee_task = Some(tokio::spawn(async move {
            let fee = match inner.ops.estimate_fee(&operation).await {
                Ok(fee) => FeeState::Ready(fee),
                Err(err) => {
                    tracing::warn!(?err, "fee estimate failed");
                    FeeState::Unavailable
                }
            };
            *inner.fee.lock().await = fee;
        }));
    }

    /// Re-runs the fee side query for the prepared operation.
    pub async fn retry_fee(&self) {
        let Some(operation) = self.inner.prepared.lock().await.clone() else {
            return;
        };
        self.spawn_fee_query(operation).await;
    }

    /// Executes the prepared operation exactly once. A second confirm
    /// while one is in flight is ignored.
    pub async fn confirm(&self) -> ConfirmOutcome {
        {
            let state = self.inner.state.lock().await;
            match *state {
                SubmitState::Confirming | SubmitState::Failed { .. } => {}
                _ => return ConfirmOutcome::Ignored,
            }
        }

        if self
            .inner
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return ConfirmOutcome::Ignored;
        }

        let Some(operation) = self.inner.prepared.lock().await.clone() else {
            self.inner.loading.store(false, Ordering::SeqCst);
            return ConfirmOutcome::Ignored;
        };

        *self.inner.state.lock().await = SubmitState::Submitting;

        let outcome = match self.inner.ops.execute(&operation).await {
            Ok(tx_hash) => {
                *self.inner.state.lock().await = SubmitState::Succeeded {
                    tx_hash: tx_hash.clone(),
                };
                self.inner.prepared.lock().await.take();
                let _ = self.inner.refresh_tx.send(());
                ConfirmOutcome::Submitted { tx_hash }
            }
            Err(err) => {
                let message = err.to_string();
                // prepared parameters are kept so the user can retry
                *self.inner.state.lock().await = SubmitState::Failed {
                    message: message.clone(),
                };
                ConfirmOutcome::Failed { message }
            }
        };

        self.inner.loading.store(false, Ordering::SeqCst);
        outcome
    }

    /// Abandons the confirmation step. Nothing has been broadcast yet,
    /// so there is no side effect beyond dropping the prepared params.
    pub async fn cancel(&self) {
        {
            let state = self.inner.state.lock().await;
            if *state == SubmitState::Submitting {
                return;
            }
        }

        if let Some(task) = self.inner.fee_task.lock().await.take() {
            task.abort();
        }
        self.inner.prepared.lock().await.take();
        *self.inner.state.lock().await = SubmitState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use energy_chain_interact::tron::params::DelegateArgs;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    struct CountingOps {
        calls: AtomicU32,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl StakeOps for CountingOps {
        async fn execute(&self, _operation: &StakeOperation) -> Result<String, crate::ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            if self.fail {
                Err(crate::ServiceError::Parameter("node rejected".to_string()))
            } else {
                Ok("0xhash".to_string())
            }
        }

        async fn estimate_fee(
            &self,
            _operation: &StakeOperation,
        ) -> Result<f64, crate::ServiceError> {
            Ok(1.1)
        }
    }

    fn delegate_op() -> StakeOperation {
        StakeOperation::Delegate(
            DelegateArgs::new(
                "TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vn",
                "TGyw6wH5UT5GVY5v6MTWedabScAwF4gffQ",
                "20",
                "energy",
            )
            .unwrap(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_confirm_submits_once() {
        let ops = Arc::new(CountingOps {
            calls: AtomicU32::new(0),
            fail: false,
        });
        let (flow, mut refresh) = SubmitFlow::new(ops.clone());

        flow.start(delegate_op(), vec![Ok(())]).await.unwrap();
        assert_eq!(flow.state().await, SubmitState::Confirming);

        let first = tokio::spawn({
            let flow = flow.clone();
            async move { flow.confirm().await }
        });
        let second = tokio::spawn({
            let flow = flow.clone();
            async move { flow.confirm().await }
        });

        let (first, second) = (first.await.unwrap(), second.await.unwrap());
        assert_eq!(ops.calls.load(Ordering::SeqCst), 1);

        let outcomes = [first, second];
        assert!(outcomes
            .iter()
            .any(|o| matches!(o, ConfirmOutcome::Submitted { .. })));
        assert!(outcomes.iter().any(|o| *o == ConfirmOutcome::Ignored));

        assert!(refresh.recv().await.is_some());
        assert!(matches!(flow.state().await, SubmitState::Succeeded { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_returns_to_idle() {
        let ops = Arc::new(CountingOps {
            calls: AtomicU32::new(0),
            fail: false,
        });
        let (flow, _refresh) = SubmitFlow::new(ops.clone());

        let err = flow
            .start(delegate_op(), vec![Ok(()), Err("数量必须大于 0".to_string())])
            .await
            .unwrap_err();
        assert_eq!(err, "数量必须大于 0");
        assert_eq!(flow.state().await, SubmitState::Idle);

        // nothing prepared, confirm is a no-op
        assert_eq!(flow.confirm().await, ConfirmOutcome::Ignored);
        assert_eq!(ops.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_params_for_retry() {
        let ops = Arc::new(CountingOps {
            calls: AtomicU32::new(0),
            fail: true,
        });
        let (flow, _refresh) = SubmitFlow::new(ops.clone());

        flow.start(delegate_op(), vec![]).await.unwrap();
        let outcome = flow.confirm().await;
        assert!(matches!(outcome, ConfirmOutcome::Failed { .. }));
        assert!(matches!(flow.state().await, SubmitState::Failed { .. }));

        // the prepared operation survived the failure
        let outcome = flow.confirm().await;
        assert!(matches!(outcome, ConfirmOutcome::Failed { .. }));
        assert_eq!(ops.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_has_no_side_effect() {
        let ops = Arc::new(CountingOps {
            calls: AtomicU32::new(0),
            fail: false,
        });
        let (flow, _refresh) = SubmitFlow::new(ops.clone());

        flow.start(delegate_op(), vec![]).await.unwrap();
        flow.cancel().await;

        assert_eq!(flow.state().await, SubmitState::Idle);
        assert_eq!(flow.confirm().await, ConfirmOutcome::Ignored);
        assert_eq!(ops.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fee_side_query() {
        let ops = Arc::new(CountingOps {
            calls: AtomicU32::new(0),
            fail: false,
        });
        let (flow, _refresh) = SubmitFlow::new(ops);

        flow.start(delegate_op(), vec![]).await.unwrap();
        // let the spawned estimate run
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert_eq!(flow.fee().await, FeeState::Ready(1.1));
    }
}
