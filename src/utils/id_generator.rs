use chrono::Utc;

/// Hands out element ids for records that arrive without one.
///
/// Ids share a time-based seed and carry a running counter, so they are unique
/// within one generator. They are not meant to be stable across renders.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    seed: String,
    issued: u32,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        let now = Utc::now();
        Self {
            prefix,
            seed: format!("{:x}{:05x}", now.timestamp(), now.timestamp_subsec_micros()),
            issued: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("{}{}_{}", self.prefix, self.seed, self.issued)
    }
}
