//! Shared harness for integration tests: an in-process fake backend and a
//! scripted stand-in for the platform credential capability.

// Each test binary uses a different subset of the harness.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use passkey_ceremony::invoker::{CredentialInvoker, InvokerError};
use serde_json::Value;

/// Serve an axum router on an ephemeral port, returning its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("passkey_ceremony=debug")
        .try_init()
        .ok();
}

/// One-shot scripted invoker. Panics if invoked more often than scripted,
/// which is exactly what the "invoker never called" properties need.
pub struct ScriptedInvoker {
    result: Mutex<Option<Result<Value, InvokerError>>>,
    pub create_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
}

impl ScriptedInvoker {
    pub fn succeeding(credential: Value) -> Arc<Self> {
        Self::scripted(Ok(credential))
    }

    pub fn failing(err: InvokerError) -> Arc<Self> {
        Self::scripted(Err(err))
    }

    /// An invoker that must never be reached.
    pub fn unreachable() -> Arc<Self> {
        Arc::new(ScriptedInvoker {
            result: Mutex::new(None),
            create_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
        })
    }

    fn scripted(result: Result<Value, InvokerError>) -> Arc<Self> {
        Arc::new(ScriptedInvoker {
            result: Mutex::new(Some(result)),
            create_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
        })
    }

    pub fn total_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst) + self.get_calls.load(Ordering::SeqCst)
    }

    fn take(&self) -> Result<Value, InvokerError> {
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("invoker called more often than scripted")
    }
}

#[async_trait::async_trait]
impl CredentialInvoker for ScriptedInvoker {
    async fn create(&self, _options: Value) -> Result<Value, InvokerError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.take()
    }

    async fn get(&self, _options: Value) -> Result<Value, InvokerError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.take()
    }
}
