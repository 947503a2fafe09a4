//! System-wide CPU / memory utilisation via `sysinfo`.

use sysinfo::{MINIMUM_CPU_UPDATE_INTERVAL, System};

/// Which utilisation figure a graph follows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Metric {
    Cpu,
    Memory,
}

/// One tick's utilisation, both in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadSample {
    pub cpu: f64,
    pub memory: f64,
}

impl LoadSample {
    #[inline]
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
        }
    }
}

pub struct LoadSampler {
    sys: System,
}

impl LoadSampler {
    /// Primes the CPU counters and waits out sysinfo's minimum refresh
    /// interval, so the first [`sample`](Self::sample) is a real reading.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        Self { sys }
    }

    pub fn sample(&mut self) -> LoadSample {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let cpu = clamp_percent(f64::from(self.sys.global_cpu_usage()));
        let memory = memory_percent(self.sys.used_memory(), self.sys.total_memory());
        if memory == 0.0 {
            tracing::warn!("total memory reported as zero; plotting 0%");
        }
        LoadSample { cpu, memory }
    }
}

impl Default for LoadSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// NaN becomes 0, everything else is clamped.
#[inline]
#[must_use]
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

#[must_use]
pub fn memory_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    clamp_percent(used as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_are_clamped() {
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
    }

    #[test]
    fn sample_lookup_by_metric() {
        let s = LoadSample {
            cpu: 12.5,
            memory: 60.0,
        };
        assert_eq!(s.get(Metric::Cpu), 12.5);
        assert_eq!(s.get(Metric::Memory), 60.0);
    }

    #[test]
    fn first_sample_waits_for_the_cpu_interval() {
        let t0 = std::time::Instant::now();
        let mut sampler = LoadSampler::new();
        assert!(t0.elapsed() >= MINIMUM_CPU_UPDATE_INTERVAL);
        let s = sampler.sample();
        assert!((0.0..=100.0).contains(&s.cpu));
        assert!((0.0..=100.0).contains(&s.memory));
    }

    #[test]
    fn memory_ratio() {
        assert_eq!(memory_percent(1, 4), 25.0);
        assert_eq!(memory_percent(5, 0), 0.0);
        assert_eq!(memory_percent(8, 4), 100.0);
    }
}
