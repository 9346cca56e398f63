/// Requests for the shell that owns the periodic sampling ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartTicking,
    StopTicking,
}
