//! The surface the chat controller renders into.
//!
//! A view holds a message list of bubbles plus two controls: the text input
//! and the send control. [`Transcript`] is the in-memory implementation; the
//! terminal view renders on top of one.

/// Who a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// Visual state of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleState {
    /// Final text is shown.
    Ready,
    /// Waiting for the backend; the text is empty.
    Loading,
    /// The request failed; the text describes the failure.
    Error,
}

/// Position of a bubble in the message list.
///
/// Ids count every bubble ever appended, so an id never refers to a
/// different bubble after older ones are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BubbleId(usize);

impl BubbleId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub role: MessageRole,
    pub text: String,
    pub state: BubbleState,
}

/// Rendering operations the chat controller needs.
pub trait ChatView {
    /// Appends a bubble to the end of the message list.
    fn append_bubble(&mut self, role: MessageRole, text: &str, state: BubbleState) -> BubbleId;

    /// Replaces the text and state of an existing bubble.
    fn update_bubble(&mut self, id: BubbleId, text: &str, state: BubbleState);

    fn set_input_enabled(&mut self, enabled: bool);

    fn set_send_enabled(&mut self, enabled: bool);

    /// Shows `value` in the input control.
    fn set_input_value(&mut self, value: &str);

    fn focus_input(&mut self);

    /// Removes every bubble from the message list.
    fn clear(&mut self);
}

/// In-memory message list and control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    bubbles: Vec<Bubble>,
    /// Id of `bubbles[0]`.
    first: usize,
    /// Most bubbles kept; older ones are dropped on append.
    limit: Option<usize>,
    input_enabled: bool,
    send_enabled: bool,
    input_value: String,
    input_focused: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            bubbles: Vec::new(),
            first: 0,
            limit: None,
            input_enabled: true,
            send_enabled: true,
            input_value: String::new(),
            input_focused: false,
        }
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transcript that keeps only the newest `limit` bubbles.
    ///
    /// The limit is at least one, so a freshly appended bubble can always
    /// be updated.
    pub fn bounded(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    fn position(&self, id: BubbleId) -> Option<usize> {
        id.0.checked_sub(self.first)
    }

    /// Bubbles in append order.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn bubble(&self, id: BubbleId) -> Option<&Bubble> {
        self.bubbles.get(self.position(id)?)
    }

    pub fn last(&self) -> Option<&Bubble> {
        self.bubbles.last()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub const fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub const fn send_enabled(&self) -> bool {
        self.send_enabled
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Whether the input control holds focus.
    ///
    /// Disabling the input drops focus, matching how a disabled control
    /// cannot stay focused.
    pub const fn input_focused(&self) -> bool {
        self.input_focused
    }
}

impl ChatView for Transcript {
    fn append_bubble(&mut self, role: MessageRole, text: &str, state: BubbleState) -> BubbleId {
        self.bubbles.push(Bubble {
            role,
            text: text.to_string(),
            state,
        });
        let id = BubbleId(self.first + self.bubbles.len() - 1);

        let excess = self
            .limit
            .map_or(0, |limit| self.bubbles.len().saturating_sub(limit));
        if excess > 0 {
            self.bubbles.drain(..excess);
            self.first += excess;
        }

        id
    }

    fn update_bubble(&mut self, id: BubbleId, text: &str, state: BubbleState) {
        if let Some(bubble) = self
            .position(id)
            .and_then(|pos| self.bubbles.get_mut(pos))
        {
            text.clone_into(&mut bubble.text);
            bubble.state = state;
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        if !enabled {
            self.input_focused = false;
        }
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }

    fn set_input_value(&mut self, value: &str) {
        value.clone_into(&mut self.input_value);
    }

    fn focus_input(&mut self) {
        if self.input_enabled {
            self.input_focused = true;
        }
    }

    fn clear(&mut self) {
        self.first += self.bubbles.len();
        self.bubbles.clear();
    }
}
