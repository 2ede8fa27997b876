//! In-memory [`DeviceClient`] for service tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use garage_domain::error::TransportError;

use crate::ports::DeviceClient;

pub(crate) struct StubDevice {
    sensor_closed: AtomicBool,
    fail_reads: AtomicBool,
    fail_pulses: AtomicBool,
    reads: AtomicUsize,
    pulses: AtomicUsize,
}

impl StubDevice {
    pub(crate) fn with_sensor(closed: bool) -> Self {
        Self {
            sensor_closed: AtomicBool::new(closed),
            fail_reads: AtomicBool::new(false),
            fail_pulses: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
            pulses: AtomicUsize::new(0),
        }
    }

    pub(crate) fn set_sensor(&self, closed: bool) {
        self.sensor_closed.store(closed, Ordering::SeqCst);
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_pulses(&self, fail: bool) {
        self.fail_pulses.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn pulses(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl DeviceClient for StubDevice {
    async fn read_sensor(&self) -> Result<bool, TransportError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TransportError::Status { status: 500 });
        }
        Ok(self.sensor_closed.load(Ordering::SeqCst))
    }

    async fn trigger_actuator(&self) -> Result<(), TransportError> {
        self.pulses.fetch_add(1, Ordering::SeqCst);
        if self.fail_pulses.load(Ordering::SeqCst) {
            return Err(TransportError::Status { status: 503 });
        }
        Ok(())
    }
}
