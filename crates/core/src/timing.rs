//! Process CPU-time sampling.

use std::time::Duration;

/// Cumulative CPU time consumed by the current process.
///
/// Pairs with `std::time::Instant` for wall-clock measurement; the trial
/// scheduler samples both once before a job's first attempt and once after
/// its terminating attempt. Returns `Duration::ZERO` if the clock is
/// unavailable.
pub fn process_cpu_time() -> Duration {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc == 0 {
        Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
    } else {
        Duration::ZERO
    }
}
