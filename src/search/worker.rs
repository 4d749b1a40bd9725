//! Search worker thread.
//!
//! The event loop is single-threaded; network requests are executed on a
//! dedicated worker thread and exchanged over mpsc channels. The loop
//! submits jobs without blocking and drains whatever outcomes have landed
//! on each timer tick. A job already handed to the worker is not cancelled
//! when a newer one supersedes it; ordering is enforced by the sequence
//! number the core attaches to every job (see `state::remote`).

use crate::model::SearchError;
use crate::search::client::{Client, SearchPage, SearchRequest};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use tracing::debug;

/// One queued query, tagged with its issue sequence number.
#[derive(Debug, Clone)]
pub struct SearchJob {
    /// Monotonic sequence number assigned by the core at issue time.
    pub seq: u64,
    /// The query to execute.
    pub request: SearchRequest,
}

/// Result of one executed job, tagged with the job's sequence number.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Sequence number of the job this outcome answers.
    pub seq: u64,
    /// The page, or the failure.
    pub result: Result<SearchPage, SearchError>,
}

/// Handle to the background search thread.
#[derive(Debug)]
pub struct SearchWorker {
    jobs: Sender<SearchJob>,
    outcomes: Receiver<SearchOutcome>,
}

impl SearchWorker {
    /// Spawn the worker thread owning `client`.
    ///
    /// The thread exits when the handle (and with it the job sender) is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn(client: Client) -> Result<Self, std::io::Error> {
        let (job_tx, job_rx) = mpsc::channel::<SearchJob>();
        let (outcome_tx, outcome_rx) = mpsc::channel::<SearchOutcome>();

        thread::Builder::new()
            .name("bibv-search".to_string())
            .spawn(move || {
                while let Ok(job) = job_rx.recv() {
                    debug!(seq = job.seq, page = job.request.page, "Executing search");
                    let result = client.search(&job.request);
                    let outcome = SearchOutcome {
                        seq: job.seq,
                        result,
                    };
                    if outcome_tx.send(outcome).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            jobs: job_tx,
            outcomes: outcome_rx,
        })
    }

    /// Queue a job for execution.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::WorkerGone`] if the worker thread has died.
    pub fn submit(&self, job: SearchJob) -> Result<(), SearchError> {
        self.jobs.send(job).map_err(|_| SearchError::WorkerGone)
    }

    /// Drain all outcomes that have arrived so far, without blocking.
    pub fn drain(&self) -> Vec<SearchOutcome> {
        let mut out = Vec::new();
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => out.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}
