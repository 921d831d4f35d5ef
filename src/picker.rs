//! Select the next message to post.
//!
//! Selection is a counter plus a uniform random draw over a fixed template
//! list, nothing more. The counter is scoped to the process: each invocation
//! starts again from 1, which is fine given one message is sent per
//! invocation.

use rand::{seq::SliceRandom, Rng};

/// The placeholder templates may carry to have the running count substituted
/// in.
const COUNTER_PLACEHOLDER: &str = "{}";

/// Draws templates at random, numbering them with a strictly increasing
/// counter.
pub struct MessagePicker {
    templates: Vec<String>,
    count: u64,
}

impl MessagePicker {
    /// `templates` is expected to be non-empty; an empty list degenerates to
    /// empty messages rather than a panic.
    pub fn new(templates: Vec<String>) -> Self {
        Self {
            templates,
            count: 0,
        }
    }

    /// Increment the counter and draw the next message. A template containing
    /// a single `{}` placeholder has the new counter value substituted;
    /// anything else is returned verbatim.
    pub fn next_message(&mut self) -> String {
        self.next_message_with(&mut rand::thread_rng())
    }

    fn next_message_with(&mut self, rng: &mut impl Rng) -> String {
        self.count += 1;

        let template = self
            .templates
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default();

        if template.contains(COUNTER_PLACEHOLDER) {
            template.replacen(COUNTER_PLACEHOLDER, &self.count.to_string(), 1)
        } else {
            template.to_owned()
        }
    }

    /// How many messages have been drawn so far this invocation.
    pub fn count(&self) -> u64 {
        self.count
    }
}
