use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CountPayload {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    ThankYou,
    LikeCount,
    Zorome,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    SetAccessCount { text: String },
    SetKiribanBadgeVisible { visible: bool },
    ClearLikeMessages,
    AppendLikeMessage { kind: MessageKind, text: String },
    SetLikeButtonEnabled { enabled: bool },
    TriggerConfetti,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderCommand {
    #[serde(flatten)]
    pub op: RenderOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_ms: Option<u64>,
}

impl RenderCommand {
    pub fn immediate(op: RenderOp) -> Self {
        Self { op, after_ms: None }
    }

    pub fn deferred(op: RenderOp, after_ms: u64) -> Self {
        Self {
            op,
            after_ms: Some(after_ms),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VisitRequest {
    pub counted: bool,
}

#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub commands: Vec<RenderCommand>,
    pub counted: bool,
}

#[derive(Debug, Serialize)]
pub struct CommandsResponse {
    pub commands: Vec<RenderCommand>,
}
