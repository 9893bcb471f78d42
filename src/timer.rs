//! The timing sources of the driver, a periodic worker for the schedules
//! and a cancellable one shot for delayed work.
use std::{
    sync::{
        mpsc::{self, RecvTimeoutError, SyncSender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

/// A source calling the callback periodically until stopped.
pub trait TimedWorker: Send {
    /// Will initialize the new worker.
    fn new() -> Self;

    /// Will start calling the callback every interval.
    fn start<T>(&mut self, callback: T, interval: Duration)
    where
        T: Send + FnMut() + 'static;

    /// Will stop the worker, the callback will not be called after this returns.
    fn stop(&mut self);

    fn is_alive(&self) -> bool;
}

/// Is the internal worker, that exists on the
/// second thread.
pub struct Worker {
    /// Contains the actuall thread, that is running.
    thread: Option<JoinHandle<()>>,
    /// Contains the sync sender used to gracefull shutdown the thread.
    shutdown: Option<SyncSender<()>>,
    /// Counts the threads using it, so as long as the count is above one
    /// the thread is running.
    alive: Arc<()>,
}

impl TimedWorker for Worker {
    fn new() -> Self {
        Self {
            thread: None,
            shutdown: None,
            alive: Arc::new(()),
        }
    }

    /// Will start the worker that will run the callback function
    /// all duration.
    /// Attention the timer assumes the callback will finish
    /// faster then the interval.
    fn start<T>(&mut self, mut callback: T, interval: Duration)
    where
        T: Send + FnMut() + 'static,
    {
        // stop any action around
        self.stop();

        let (send, recv) = mpsc::sync_channel::<()>(1);
        let alive = self.alive.clone();
        let thread = thread::spawn(move || {
            // only held to count the references
            let _alive = alive;
            let mut timeout = interval;
            loop {
                match recv.recv_timeout(timeout) {
                    Err(RecvTimeoutError::Timeout) => {
                        let start = Instant::now();

                        callback();

                        // make sure the system will at most wait the interval
                        timeout = interval
                            .checked_sub(start.elapsed())
                            .unwrap_or_else(|| Duration::from_secs(0));
                    }
                    Ok(_) | Err(_) => break, // shutdown
                }
            }
        });

        self.thread = Some(thread);
        self.shutdown = Some(send);
    }

    fn stop(&mut self) {
        // Will stop the worker, in two steps one by sending an empty message
        // and second by droping the only sender for the given receiver.
        if let Some(sender) = self.shutdown.take() {
            // an error means the thread already stopped on its own
            let _ = sender.try_send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("The worker thread paniced.");
            }
        }
    }

    fn is_alive(&self) -> bool {
        Arc::strong_count(&self.alive) > 1
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Runs the callback once after the delay, unless it was cancelled
/// before. Dropping the handle cancels it as well.
#[derive(Debug)]
pub struct Deferred {
    cancel: Option<SyncSender<()>>,
}

impl Deferred {
    /// Will arm a new one shot.
    pub fn spawn<T>(delay: Duration, callback: T) -> Self
    where
        T: Send + FnOnce() + 'static,
    {
        let (send, recv) = mpsc::sync_channel::<()>(1);
        thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = recv.recv_timeout(delay) {
                callback();
            }
        });

        Self { cancel: Some(send) }
    }

    /// Will cancel the callback if it did not run yet.
    pub fn cancel(mut self) {
        self.disarm();
    }

    fn disarm(&mut self) {
        if let Some(sender) = self.cancel.take() {
            let _ = sender.try_send(());
        }
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        self.disarm();
    }
}
