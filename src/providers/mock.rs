/*!
 * Mock gateway implementation for testing.
 *
 * Avoids external API calls by transforming text in-process. The mock
 * records every text it is asked to translate and can be scripted to
 * fail on a specific call, which makes fail-fast behavior observable
 * in tests.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::GatewayError;
use crate::providers::TranslationGateway;

/// How the mock transforms input text
#[derive(Debug, Clone, Copy)]
pub enum MockMode {
    /// Return the input unchanged
    Echo,
    /// Return the input uppercased
    Uppercase,
}

/// Tracks calls made against the mock gateway
#[derive(Debug, Default)]
pub struct CallTracker {
    /// Every text submitted, in call order
    pub calls: Vec<String>,
    /// 1-based call number that should fail, if any
    pub fail_on_call: Option<usize>,
}

/// Mock implementation of a translation gateway
#[derive(Debug)]
pub struct MockGateway {
    mode: MockMode,
    tracker: Arc<Mutex<CallTracker>>,
}

impl MockGateway {
    /// Create a new mock gateway with the given transform
    pub fn new(mode: MockMode) -> Self {
        MockGateway {
            mode,
            tracker: Arc::new(Mutex::new(CallTracker::default())),
        }
    }

    /// Get the call tracker
    pub fn tracker(&self) -> Arc<Mutex<CallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the n-th call (1-based)
    pub fn fail_on_call(&self, n: usize) {
        self.tracker.lock().unwrap().fail_on_call = Some(n);
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.tracker.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl TranslationGateway for MockGateway {
    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyText);
        }

        let call_number = {
            let mut tracker = self.tracker.lock().unwrap();
            tracker.calls.push(text.to_string());
            tracker.calls.len()
        };

        let should_fail = {
            let tracker = self.tracker.lock().unwrap();
            tracker.fail_on_call == Some(call_number)
        };

        if should_fail {
            return Err(GatewayError::ApiError {
                status_code: 500,
                message: format!("mock failure on call {}", call_number),
            });
        }

        Ok(match self.mode {
            MockMode::Echo => text.to_string(),
            MockMode::Uppercase => text.to_uppercase(),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
