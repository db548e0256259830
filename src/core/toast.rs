/// Single-slot toast notification.
///
/// Each `show` replaces the visible message, starts a new generation and
/// hands back the hide timer armed for the previous message so the caller
/// can cancel it. A hide only takes effect while its generation is still
/// current, so a superseded timer can never cut the newer message short.
///
/// `T` is the caller's timer handle (a `setTimeout` id in the browser).
#[derive(Clone, Debug)]
pub struct Toast<T> {
    text: String,
    visible: bool,
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Toast<T> {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: false,
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Toast<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`. Returns the new generation and the superseded hide
    /// timer, if one was still pending.
    pub fn show(&mut self, message: &str) -> (u64, Option<T>) {
        self.text.clear();
        self.text.push_str(message);
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        (self.generation, self.pending.take())
    }

    /// Record the hide timer armed for `generation`. A timer for a stale
    /// generation is handed back for cancellation.
    pub fn arm(&mut self, generation: u64, timer: T) -> Option<T> {
        if generation != self.generation || !self.visible {
            return Some(timer);
        }
        self.pending.replace(timer)
    }

    /// Hide timer callback. Returns whether the toast was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if !self.visible || generation != self.generation {
            return false;
        }
        self.visible = false;
        self.pending = None;
        true
    }

    pub fn visible_text(&self) -> Option<&str> {
        self.visible.then_some(self.text.as_str())
    }
}
