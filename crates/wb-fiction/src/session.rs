//! State of a single playthrough.

use wb_core::{QUIT_KEY, RouteStep, StoryNode};

use crate::input::normalize_token;

/// What applying one token did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A choice matched; the session moved to `to`.
    Advanced {
        /// Identifier of the new current node.
        to: String,
    },
    /// The token matched nothing. The session is unchanged.
    Invalid,
    /// The quit token was given.
    Quit,
}

/// How a finished playthrough ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    /// A terminal node was reached.
    Reached {
        /// Identifier of the terminal node.
        node: String,
    },
    /// The player quit before reaching an ending.
    Quit,
}

/// Mutable state of one playthrough: where the player is and what they
/// picked so far. Created fresh per playthrough and never persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    current: String,
    taken: Vec<RouteStep>,
    terminated: bool,
    quit: bool,
    map_announced: bool,
}

impl SessionState {
    /// Start a session at `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            taken: Vec::new(),
            terminated: false,
            quit: false,
            map_announced: false,
        }
    }

    /// Identifier of the current node.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Decisions taken so far, in order.
    pub fn taken(&self) -> &[RouteStep] {
        &self.taken
    }

    /// Whether a terminal node was reached.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether the player quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// How the session ended, or `None` while it is still running.
    pub fn ending(&self) -> Option<Ending> {
        if self.terminated {
            Some(Ending::Reached {
                node: self.current.clone(),
            })
        } else if self.quit {
            Some(Ending::Quit)
        } else {
            None
        }
    }

    /// Whether the finished session should be offered a route summary:
    /// an ending was reached and at least one choice was made.
    pub fn wants_summary(&self) -> bool {
        self.terminated && !self.taken.is_empty()
    }

    /// Apply a token to `node`, which must be the current node.
    ///
    /// Matching is case-insensitive. [`QUIT_KEY`] always quits; stories
    /// cannot bind it. An invalid token leaves the session untouched.
    pub fn apply(&mut self, node: &StoryNode, token: &str) -> Transition {
        let token = normalize_token(token);

        if token.chars().eq(QUIT_KEY.to_uppercase()) {
            self.quit = true;
            return Transition::Quit;
        }

        let Some(choice) = node.find_choice(&token) else {
            return Transition::Invalid;
        };

        self.taken
            .push(RouteStep::new(&node.title, &choice.description));
        self.current.clone_from(&choice.target);
        Transition::Advanced {
            to: choice.target.clone(),
        }
    }

    /// Mark the session as having reached a terminal node.
    pub(crate) fn terminate(&mut self) {
        self.terminated = true;
    }

    /// Mark the session as quit without a token, e.g. on end of input.
    pub(crate) fn abandon(&mut self) {
        self.quit = true;
    }

    /// Record that the map was announced. Returns `false` if it already was.
    pub(crate) fn mark_map_announced(&mut self) -> bool {
        !std::mem::replace(&mut self.map_announced, true)
    }
}
