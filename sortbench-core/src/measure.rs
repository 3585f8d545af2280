//! Timing primitives for the harness
//!
//! Wall time comes from the monotonic `std::time::Instant`. A raw cycle
//! reading (RDTSCP on x86_64, CNTVCT_EL0 on AArch64) is taken over the same
//! window and reported alongside it.

use std::io;
use std::time::{Duration, Instant};

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn cycle_count() -> u64 {
    // SAFETY: RDTSCP is present on every x86_64 CPU this crate targets.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn cycle_count() -> u64 {
    let ticks: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks, options(nostack, nomem));
    }
    ticks
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn cycle_count() -> u64 {
    0
}

/// Stopwatch wrapped around exactly one strategy invocation
pub(crate) struct Timer {
    started: Instant,
    start_cycles: u64,
}

impl Timer {
    #[inline(always)]
    pub(crate) fn start() -> Self {
        let start_cycles = cycle_count();
        Self {
            started: Instant::now(),
            start_cycles,
        }
    }

    /// Elapsed wall time and cycles (0 without a cycle counter)
    #[inline(always)]
    pub(crate) fn stop(&self) -> (Duration, u64) {
        let elapsed = self.started.elapsed();
        let cycles = cycle_count().saturating_sub(self.start_cycles);
        (elapsed, cycles)
    }
}

/// Pin the calling thread to one core so the start and stop readings come
/// from the same counter.
///
/// Cores outside the affinity mask's range are rejected with
/// [`io::ErrorKind::InvalidInput`].
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), io::Error> {
    if cpu >= libc::CPU_SETSIZE as usize {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cpu {cpu} is outside the affinity mask (max {})", libc::CPU_SETSIZE - 1),
        ));
    }

    // SAFETY: cpu_set_t is plain data, an all-zero value is the empty set,
    // and `cpu` was bounds-checked above.
    let result = unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(cpu, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
    };

    if result == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Pinning is a no-op off Linux
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_covers_the_window() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let (elapsed, _cycles) = timer.stop();

        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn cycle_counter_never_goes_backwards() {
        let a = cycle_count();
        let b = cycle_count();
        assert!(b >= a);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn out_of_range_core_is_rejected() {
        let err = pin_to_cpu(5000).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err = pin_to_cpu(libc::CPU_SETSIZE as usize).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
