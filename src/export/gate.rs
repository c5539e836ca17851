//! Single-flight export coalescing with a deferred download.

/// Externally visible export state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportStatus {
    Idle,
    Running,
    /// A run is in flight and another one is pending.
    Queued,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Idle,
    Running,
    RunningQueued,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Nothing was running; the caller should drive a run now.
    Start,
    /// Folded into the pending run.
    Coalesced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Requests arrived during the run; run once more on the latest card.
    RunAgain,
    /// No run pending. `download` is set when a download was deferred until now.
    Settled { download: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadRequest {
    Now,
    Deferred,
}

/// At most one export in flight, at most one queued behind it. Runs are never cancelled.
#[derive(Clone, Debug)]
pub struct ExportGate {
    state: GateState,
    download_pending: bool,
}

impl Default for ExportGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Idle,
            download_pending: false,
        }
    }

    pub fn status(&self) -> ExportStatus {
        match self.state {
            GateState::Idle => ExportStatus::Idle,
            GateState::Running => ExportStatus::Running,
            GateState::RunningQueued => ExportStatus::Queued,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state != GateState::Idle
    }

    pub fn download_pending(&self) -> bool {
        self.download_pending
    }

    pub fn request(&mut self) -> RequestOutcome {
        match self.state {
            GateState::Idle => {
                self.state = GateState::Running;
                RequestOutcome::Start
            }
            GateState::Running | GateState::RunningQueued => {
                self.state = GateState::RunningQueued;
                RequestOutcome::Coalesced
            }
        }
    }

    /// Called once per completed run.
    pub fn finish(&mut self) -> RunOutcome {
        match self.state {
            GateState::RunningQueued => {
                self.state = GateState::Running;
                RunOutcome::RunAgain
            }
            GateState::Running | GateState::Idle => {
                self.state = GateState::Idle;
                RunOutcome::Settled {
                    download: std::mem::take(&mut self.download_pending),
                }
            }
        }
    }

    /// Re-arm a download taken by [`ExportGate::finish`] whose run did not produce a frame.
    pub fn keep_download_pending(&mut self) {
        self.download_pending = true;
    }

    pub fn request_download(&mut self) -> DownloadRequest {
        if self.is_busy() {
            self.download_pending = true;
            DownloadRequest::Deferred
        } else {
            DownloadRequest::Now
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/gate.rs"]
mod tests;
