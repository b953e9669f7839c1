// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock text generator for testing
//!
//! Provides a configurable mock implementation of the TextGenerator trait
//! that can be used in tests without making real API calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::{ApiError, CopysmithError, Result};
use crate::llm::provider::TextGenerator;

/// A mock text generator for testing
#[derive(Clone)]
pub struct MockGenerator {
    /// Provider name
    name: String,
    /// Configured replies
    replies: Arc<Mutex<Vec<MockReply>>>,
    /// Call counter
    call_count: Arc<AtomicUsize>,
    /// Recorded prompts
    recorded_prompts: Arc<Mutex<Vec<String>>>,
    /// Artificial latency per call
    delay: Option<Duration>,
}

/// A pre-configured reply for the mock generator
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Return this text
    Text(String),
    /// Fail with a server error
    ServerError { status: u16, message: String },
    /// Fail with a timeout
    Timeout,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Create a new mock generator
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            replies: Arc::new(Mutex::new(vec![MockReply::Text(
                "Mock response".to_string(),
            )])),
            call_count: Arc::new(AtomicUsize::new(0)),
            recorded_prompts: Arc::new(Mutex::new(vec![])),
            delay: None,
        }
    }

    /// Set the text response
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.with_replies(vec![MockReply::Text(text.into())])
    }

    /// Queue multiple responses (returned in order)
    pub fn with_responses(self, texts: Vec<String>) -> Self {
        self.with_replies(texts.into_iter().map(MockReply::Text).collect())
    }

    /// Fail every call with a server error
    pub fn with_error(self, status: u16, message: impl Into<String>) -> Self {
        self.with_replies(vec![MockReply::ServerError {
            status,
            message: message.into(),
        }])
    }

    /// Queue arbitrary replies (returned in order, the last one repeats)
    pub fn with_replies(self, replies: Vec<MockReply>) -> Self {
        *lock(&self.replies) = replies;
        self
    }

    /// Sleep before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times generate() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get all recorded prompts
    pub fn recorded_prompts(&self) -> Vec<String> {
        lock(&self.recorded_prompts).clone()
    }

    /// Get the last prompt received
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.recorded_prompts).last().cloned()
    }

    /// Get the next reply
    fn next_reply(&self) -> MockReply {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);
        let replies = lock(&self.replies);
        // Cycle through replies or return the last one
        if replies.is_empty() {
            MockReply::Text("Mock response".to_string())
        } else {
            replies[count.min(replies.len() - 1)].clone()
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock generator lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        lock(&self.recorded_prompts).push(prompt.to_string());

        let reply = self.next_reply();

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::ServerError { status, message } => {
                Err(CopysmithError::Api(ApiError::ServerError { status, message }))
            }
            MockReply::Timeout => Err(CopysmithError::Api(ApiError::Timeout)),
        }
    }
}
