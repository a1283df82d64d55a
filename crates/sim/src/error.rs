/// Errors that can occur while building or running a simulated mission.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("mission parameters failed validation")]
    InvalidParams,

    #[error("mission still running after {0} ticks")]
    TickBudgetExhausted(u32),
}
