//! Diagnostics collected while merging layers.
//!
//! Nothing recorded here stops a load. Messages are keyed by the id of the
//! container that was being loaded when the problem was found.

use serde::Serialize;
use tracing::warn;

/// Receiver of merge diagnostics.
pub trait DiagnosticsSink {
    fn add(&mut self, container: &str, message: String);
}

/// A single diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub container: String,
    pub text: String,
}

/// Diagnostics in the order they were reported.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Messages {
    messages: Vec<Message>,
}

impl Messages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn for_container<'a>(
        &'a self,
        container: &'a str,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| m.container == container)
    }
}

impl DiagnosticsSink for Messages {
    fn add(&mut self, container: &str, message: String) {
        warn!(container, "{}", message);
        self.messages.push(Message {
            container: container.to_string(),
            text: message,
        });
    }
}
