use crate::models::{MessageKind, RenderCommand, RenderOp};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub trait RenderSink {
    fn set_access_count(&self, text: &str);
    fn set_kiriban_badge_visible(&self, visible: bool);
    fn clear_like_messages(&self);
    fn append_like_message(&self, kind: MessageKind, text: &str);
    fn set_like_button_enabled(&self, enabled: bool);
    fn trigger_confetti(&self);
}

pub trait Timers {
    fn schedule(&self, delay: Duration, action: DeferredAction);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    HideKiribanBadge,
    EnableLikeButton,
}

impl DeferredAction {
    fn into_op(self) -> RenderOp {
        match self {
            Self::HideKiribanBadge => RenderOp::SetKiribanBadgeVisible { visible: false },
            Self::EnableLikeButton => RenderOp::SetLikeButtonEnabled { enabled: true },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Arc<Mutex<Vec<RenderCommand>>>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<RenderCommand> {
        std::mem::take(&mut *self.commands.lock().expect("command buffer poisoned"))
    }

    fn push(&self, op: RenderOp) {
        self.commands
            .lock()
            .expect("command buffer poisoned")
            .push(RenderCommand::immediate(op));
    }
}

impl RenderSink for CommandBuffer {
    fn set_access_count(&self, text: &str) {
        self.push(RenderOp::SetAccessCount {
            text: text.to_string(),
        });
    }

    fn set_kiriban_badge_visible(&self, visible: bool) {
        self.push(RenderOp::SetKiribanBadgeVisible { visible });
    }

    fn clear_like_messages(&self) {
        self.push(RenderOp::ClearLikeMessages);
    }

    fn append_like_message(&self, kind: MessageKind, text: &str) {
        self.push(RenderOp::AppendLikeMessage {
            kind,
            text: text.to_string(),
        });
    }

    fn set_like_button_enabled(&self, enabled: bool) {
        self.push(RenderOp::SetLikeButtonEnabled { enabled });
    }

    fn trigger_confetti(&self) {
        self.push(RenderOp::TriggerConfetti);
    }
}

impl Timers for CommandBuffer {
    // Re-arming an action replaces its pending command: last timer wins.
    fn schedule(&self, delay: Duration, action: DeferredAction) {
        let op = action.into_op();
        let after_ms = delay.as_millis() as u64;
        let mut commands = self.commands.lock().expect("command buffer poisoned");
        if let Some(pending) = commands
            .iter_mut()
            .find(|command| command.after_ms.is_some() && command.op == op)
        {
            pending.after_ms = Some(after_ms);
        } else {
            commands.push(RenderCommand::deferred(op, after_ms));
        }
    }
}
