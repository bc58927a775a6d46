//! Hit/miss statistics collection and reporting.
//!
//! Counters are monotonic and never reset during a session. The derived
//! hit rate guards its division so an empty session reports 0.

/// Session statistics for the simulated cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Requests that found their page resident.
    pub hits: u64,
    /// Requests that did not find their page resident.
    pub misses: u64,
}

impl CacheStats {
    /// Total number of accepted requests.
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate in `[0.0, 1.0]`; `0.0` when no request has been accepted.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("==========================================");
        println!("PAGE CACHE SIMULATION STATISTICS");
        println!("==========================================");
        println!("requests                 {}", self.total());
        println!("hits                     {}", self.hits);
        println!("misses                   {}", self.misses);
        println!("hit_rate                 {:.1}%", self.hit_rate() * 100.0);
        println!("==========================================");
    }
}
