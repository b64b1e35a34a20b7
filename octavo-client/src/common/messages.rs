//! Update results returned by domain controllers.
//!
//! Controllers never spawn work themselves. Each update returns an [`Update`]
//! carrying an optional [`Command`] for the host to run plus any [`Effect`]s
//! for outer collaborators. The host awaits the command and feeds the
//! resolved message back through the controller's update function.

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::common::effects::Effect;

/// A deferred unit of async work that resolves to a follow-up message.
pub struct Command<M>(BoxFuture<'static, M>);

impl<M> Command<M>
where
    M: Send + 'static,
{
    /// Pair a future with the completion message it should resolve to.
    pub fn perform<F, T>(
        future: F,
        on_complete: impl FnOnce(T) -> M + Send + 'static,
    ) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        Command(async move { on_complete(future.await) }.boxed())
    }

    /// Adapt the resolved message into an enclosing message type.
    pub fn map<N>(self, adapt: impl FnOnce(M) -> N + Send + 'static) -> Command<N>
    where
        N: Send + 'static,
    {
        Command(async move { adapt(self.0.await) }.boxed())
    }

    /// Run the command to completion, yielding the follow-up message.
    pub async fn run(self) -> M {
        self.0.await
    }
}

impl<M> std::fmt::Debug for Command<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Command(..)")
    }
}

/// Result of a controller update: optional follow-up work plus outward
/// effects to broadcast.
pub struct Update<M> {
    /// Async work for the host to run; resolves to the next message.
    pub command: Option<Command<M>>,
    /// Effects for outer collaborators, drained by the host.
    pub effects: Vec<Effect>,
}

impl<M> Update<M> {
    /// Create an empty update (no command or effects).
    pub fn none() -> Self {
        Self {
            command: None,
            effects: Vec::new(),
        }
    }

    /// Create an update with just a command.
    pub fn command(command: Command<M>) -> Self {
        Self {
            command: Some(command),
            effects: Vec::new(),
        }
    }

    /// Create an update with a single effect.
    pub fn effect(effect: Effect) -> Self {
        Self {
            command: None,
            effects: vec![effect],
        }
    }

    /// Check if this update carries any work or effects.
    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.effects.is_empty()
    }

    /// Adapt the command's message type; effects pass through unchanged.
    pub fn map<N>(self, adapt: impl FnOnce(M) -> N + Send + 'static) -> Update<N>
    where
        M: Send + 'static,
        N: Send + 'static,
    {
        Update {
            command: self.command.map(|command| command.map(adapt)),
            effects: self.effects,
        }
    }
}

impl<M> std::fmt::Debug for Update<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update")
            .field("has_command", &self.command.is_some())
            .field("effects", &self.effects)
            .finish()
    }
}
