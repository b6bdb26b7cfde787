/// Coalesces high-frequency samples into at most one per animation frame.
///
/// `offer` keeps only the newest sample and reports whether a frame callback
/// still has to be requested; `take` is called from that callback.
#[derive(Clone, Debug)]
pub struct FrameGate<T> {
    pending: Option<T>,
    scheduled: bool,
}

impl<T> FrameGate<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            scheduled: false,
        }
    }

    pub fn offer(&mut self, sample: T) -> bool {
        self.pending = Some(sample);
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.scheduled = false;
    }
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_offer_requests_a_frame() {
        let mut gate = FrameGate::new();
        assert!(gate.offer(1));
        assert!(!gate.offer(2));
        assert!(!gate.offer(3));
        assert_eq!(gate.take(), Some(3));
        assert_eq!(gate.take(), None);
        assert!(gate.offer(4));
    }

    #[test]
    fn cancel_drops_pending_sample() {
        let mut gate = FrameGate::new();
        gate.offer((1.0, 2.0));
        gate.cancel();
        assert!(!gate.is_scheduled());
        assert!(!gate.has_pending());
        assert!(gate.offer((3.0, 4.0)));
    }
}
