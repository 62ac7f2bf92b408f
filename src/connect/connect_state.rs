/// Observable state flags for the connect screen.
///
/// Holds the `connecting` and `color_toggle` flags and notifies subscribed
/// listeners whenever one of them actually mutates. Listeners are plain
/// closures invoked on the caller's thread; the frame loop uses one to
/// request a redraw.
pub struct ConnectState {
    connecting: bool,
    color_toggle: bool,
    listeners: Vec<Box<dyn FnMut()>>,
}

impl ConnectState {
    pub fn new() -> Self {
        Self {
            connecting: false,
            color_toggle: false,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener called after every state mutation.
    pub fn subscribe<F: FnMut() + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    /// Moves Idle -> Connecting. Returns true only when this call performed
    /// the transition; repeat calls leave the state untouched.
    pub fn begin_connecting(&mut self) -> bool {
        if self.connecting {
            return false;
        }
        self.connecting = true;
        self.notify();
        true
    }

    /// Flips the color toggle and returns true, or returns false without
    /// touching anything while still Idle. The toggle can only ever change
    /// while connecting.
    pub fn toggle_color(&mut self) -> bool {
        if !self.connecting {
            return false;
        }
        self.color_toggle = !self.color_toggle;
        self.notify();
        true
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn color_toggle(&self) -> bool {
        self.color_toggle
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }
}

impl Default for ConnectState {
    fn default() -> Self {
        Self::new()
    }
}
