/// Default cache lifetime of the module in seconds.
pub const DEFAULT_CACHE_TIME: u32 = 1800;

/// Longest delay browser timers accept; larger values fire almost at once.
pub const MAX_REFRESH_INTERVAL_MS: u64 = i32::MAX as u64;

/// Display switches of one module instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub show_severity: bool,
    pub auto_refresh: bool,
    /// Seconds; only used to derive the client refresh interval.
    pub cache_time: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            show_severity: true,
            auto_refresh: false,
            cache_time: DEFAULT_CACHE_TIME,
        }
    }
}

impl RenderParams {
    /// Interval handed to the client-side refresh controller, capped at
    /// [`MAX_REFRESH_INTERVAL_MS`].
    pub fn refresh_interval_ms(&self) -> u64 {
        (u64::from(self.cache_time) * 1000).min(MAX_REFRESH_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        assert_eq!(RenderParams::default().refresh_interval_ms(), 1_800_000);
    }

    #[test]
    fn test_interval_is_capped_for_timers() {
        let largest = RenderParams { cache_time: 2_147_483, ..Default::default() };
        assert_eq!(largest.refresh_interval_ms(), 2_147_483_000);

        let too_long = RenderParams { cache_time: 3_000_000, ..Default::default() };
        assert_eq!(too_long.refresh_interval_ms(), 2_147_483_647);

        let max = RenderParams { cache_time: u32::MAX, ..Default::default() };
        assert_eq!(max.refresh_interval_ms(), MAX_REFRESH_INTERVAL_MS);
    }
}
