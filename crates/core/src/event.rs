//! Completion signalling between phase bodies and the actuation layer.
//!
//! Each phase body arms the shared [`CompletionSignal`] and hands the returned
//! [`CompletionToken`] to whatever long-running operation it starts. The
//! operation fires the token when it finishes, which makes the sequencer
//! eligible to execute the next phase body on a later tick.
//!
//! Arming bumps a generation counter, so a token from an earlier arm cycle
//! can never satisfy the current wait. Late completions from abandoned
//! operations are rejected and counted instead of corrupting sequencing.

use core::cell::Cell;

/// Capability to fire one specific arm cycle of a [`CompletionSignal`].
///
/// Tokens are cheap to copy and carry only the generation they were minted
/// for. A token becomes stale the moment the signal is re-armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionToken {
    generation: u32,
}

/// Single-owner completion flag with generation-checked firing.
///
/// The signal is polled by the mission sequencer once per tick. It is not
/// thread-safe and is intended for a single-threaded cooperative loop where
/// the actuation layer and the sequencer run in lockstep.
///
/// # Example
///
/// ```
/// use depot_core::event::CompletionSignal;
///
/// let signal = CompletionSignal::new();
/// let token = signal.arm();
/// assert!(!signal.is_fired());
///
/// // Actuation layer reports completion later.
/// assert!(signal.fire(token));
/// assert!(signal.is_fired());
///
/// // Re-arming invalidates the old token.
/// let fresh = signal.arm();
/// assert!(!signal.fire(token));
/// assert_eq!(signal.stale_fires(), 1);
/// assert!(signal.fire(fresh));
/// ```
#[derive(Debug, Default)]
pub struct CompletionSignal {
    fired: Cell<bool>,
    generation: Cell<u32>,
    stale_fires: Cell<u32>,
}

impl CompletionSignal {
    /// Creates an unarmed signal. The first [`arm`](Self::arm) call starts
    /// generation 1.
    pub const fn new() -> Self {
        Self {
            fired: Cell::new(false),
            generation: Cell::new(0),
            stale_fires: Cell::new(0),
        }
    }

    /// Clears the fired flag and starts a new generation.
    ///
    /// Returns the token that the current wait will accept. Any token from
    /// a previous arm cycle is invalidated.
    pub fn arm(&self) -> CompletionToken {
        self.fired.set(false);
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        CompletionToken { generation: next }
    }

    /// Marks the current wait as complete if `token` matches the live
    /// generation.
    ///
    /// Returns `true` when the fire was accepted. A stale token leaves the
    /// signal untouched, increments the stale counter and returns `false`.
    /// Firing the live token again after it already fired is a no-op that
    /// still returns `true`.
    pub fn fire(&self, token: CompletionToken) -> bool {
        if token.generation == self.generation.get() {
            self.fired.set(true);
            true
        } else {
            self.stale_fires.set(self.stale_fires.get().wrapping_add(1));
            false
        }
    }

    /// Returns whether the current generation has fired.
    pub fn is_fired(&self) -> bool {
        self.fired.get()
    }

    /// Returns the live generation number. 0 means never armed.
    pub fn generation(&self) -> u32 {
        self.generation.get()
    }

    /// Returns how many stale fires have been rejected since construction.
    pub fn stale_fires(&self) -> u32 {
        self.stale_fires.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
