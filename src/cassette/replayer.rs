//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Per port+method queue with its read position.
#[derive(Debug, Default)]
struct Queue {
    interactions: Vec<Interaction>,
    cursor: usize,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Queue>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Queue> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().interactions.push(interaction.clone());
        }
        Self { queues }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination. A replayed audit that asks for something
    /// the recording never saw has diverged and cannot produce a faithful
    /// result.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }

        let queue = self.queues.entry(key).or_default();
        assert!(
            queue.cursor < queue.interactions.len(),
            "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
             have been consumed. Last interaction was seq={last_seq}.",
            count = queue.interactions.len(),
            last_seq = queue.interactions.last().map_or(0, |i| i.seq),
        );

        let index = queue.cursor;
        queue.cursor += 1;
        &queue.interactions[index]
    }
}
