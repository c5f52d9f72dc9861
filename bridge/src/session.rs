use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, info};

use crate::error::BridgeError;
use crate::module::Module;
use crate::scope::HostScope;

/// One-shot stop request shared between a [`Session`] and its host.
///
/// Triggering is idempotent. The session never triggers its own signal.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    triggered: Mutex<bool>,
    cond: Condvar,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        let mut triggered = self.inner.triggered.lock();
        if !*triggered {
            *triggered = true;
            self.inner.cond.notify_all();
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.inner.triggered.lock()
    }

    /// Block until triggered.
    pub fn wait(&self) {
        let mut triggered = self.inner.triggered.lock();
        while !*triggered {
            self.inner.cond.wait(&mut triggered);
        }
    }

    /// Block until triggered or `timeout` elapses. Returns whether the
    /// signal was triggered.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut triggered = self.inner.triggered.lock();
        while !*triggered {
            if self.inner.cond.wait_until(&mut triggered, deadline).timed_out() {
                break;
            }
        }
        *triggered
    }
}

/// An installed module, kept resident until the host stops it.
#[derive(Debug)]
pub struct Session {
    module: Module,
    shutdown: ShutdownSignal,
}

impl Session {
    /// Bind every native of `module` into `scope`, in table order.
    ///
    /// The module is consumed: a table is installed exactly once.
    pub fn start<S: HostScope + ?Sized>(module: Module, scope: &mut S) -> Result<Self, BridgeError> {
        for native in module.natives() {
            scope.define_global(native)?;
            debug!(name = %native.name, arity = native.arity, "installed native");
        }
        info!(count = module.len(), "module installed");

        Ok(Self {
            module,
            shutdown: ShutdownSignal::new(),
        })
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Handle the host uses to end [`Session::run`].
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Park the calling thread until the host triggers shutdown.
    pub fn run(self) {
        debug!("session parked");
        self.shutdown.wait();
        info!("session shut down");
    }

    /// Like [`Session::run`] with a deadline. Returns `true` if shutdown was
    /// requested, `false` if the timeout elapsed first.
    pub fn run_for(&self, timeout: Duration) -> bool {
        self.shutdown.wait_timeout(timeout)
    }
}
