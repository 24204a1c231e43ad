//! Background evaluation worker.
//!
//! A [`Worker`] owns one thread and answers [`PointRequest`]s in the order
//! they were posted. [`handle_message`] is the same request/response step on
//! raw JSON, for callers that bring their own transport.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::config::EscapeParams;
use crate::error::{Error, Result};
use crate::escape::EscapeTime;
use crate::message::{PointRequest, PointResult};

pub fn handle_message(evaluator: &EscapeTime, json: &str) -> Result<String> {
    let request = PointRequest::from_json(json)?;
    request.evaluate(evaluator).to_json()
}

pub struct Worker {
    requests: Option<Sender<PointRequest>>,
    results: Receiver<PointResult>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn spawn(params: EscapeParams) -> Result<Self> {
        let evaluator = EscapeTime::new(params)?;
        let (request_tx, request_rx) = mpsc::channel::<PointRequest>();
        let (result_tx, result_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("escapetime-worker".to_string())
            .spawn(move || {
                log::debug!("Worker started with {:?}", evaluator.params());
                for request in request_rx {
                    if result_tx.send(request.evaluate(&evaluator)).is_err() {
                        log::warn!("Result receiver dropped, stopping worker");
                        return;
                    }
                }
                log::debug!("Request channel closed, worker exiting");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            results: result_rx,
            handle: Some(handle),
        })
    }

    pub fn post(&self, request: PointRequest) -> Result<()> {
        let requests = self.requests.as_ref().ok_or(Error::Disconnected)?;
        requests.send(request).map_err(|_| Error::Disconnected)
    }

    /// Blocks until the next result arrives.
    pub fn recv(&self) -> Result<PointResult> {
        self.results.recv().map_err(|_| Error::Disconnected)
    }

    pub fn try_recv(&self) -> Result<Option<PointResult>> {
        match self.results.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::Disconnected),
        }
    }

    /// Closes the request channel and waits for the thread to finish.
    /// Results already computed stay readable through `recv`.
    pub fn shutdown(&mut self) -> Result<()> {
        self.requests.take();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| Error::WorkerPanicked),
            None => Ok(()),
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::warn!("Worker shutdown failed: {}", e);
        }
    }
}
