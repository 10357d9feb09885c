use crate::client::CounterApi;
use crate::digits::is_repeated_digit;
use crate::format::group_thousands;
use crate::models::MessageKind;
use crate::render::{DeferredAction, RenderSink, Timers};
use crate::session::{SessionGuard, SessionStore};
use std::time::Duration;
use tracing::warn;

pub const KIRIBAN_BADGE_WINDOW: Duration = Duration::from_secs(5);
pub const LIKE_COOLDOWN: Duration = Duration::from_secs(3);

pub const COUNT_ERROR_TEXT: &str = "エラー";
pub const LIKE_ERROR_TEXT: &str = "エラーが発生しました";
pub const THANK_YOU_TEXT: &str = "ありがとう！";
pub const ZOROME_TEXT: &str = "ゾロ目だ！";

#[derive(Debug, Clone)]
pub struct CounterKeys {
    pub access: String,
    pub like: String,
}

pub struct PageController<A, S, R, T> {
    api: A,
    keys: CounterKeys,
    session: SessionGuard<S>,
    sink: R,
    timers: T,
}

impl<A, S, R, T> PageController<A, S, R, T>
where
    A: CounterApi,
    S: SessionStore,
    R: RenderSink,
    T: Timers,
{
    pub fn new(api: A, keys: CounterKeys, session: SessionGuard<S>, sink: R, timers: T) -> Self {
        Self {
            api,
            keys,
            session,
            sink,
            timers,
        }
    }

    pub fn session(&self) -> &SessionGuard<S> {
        &self.session
    }

    // The access workflow and the like read are independent; neither
    // observes the other's result.
    pub async fn handle_page_load(&self) {
        tokio::join!(self.load_access_counter(), self.load_like_count());
    }

    pub async fn load_access_counter(&self) {
        if self.session.should_increment() {
            match self.api.hit(&self.keys.access).await {
                Ok(count) => {
                    self.sink.set_access_count(&group_thousands(count));
                    if is_repeated_digit(count) {
                        self.sink.set_kiriban_badge_visible(true);
                        self.timers
                            .schedule(KIRIBAN_BADGE_WINDOW, DeferredAction::HideKiribanBadge);
                    }
                }
                Err(err) => {
                    warn!("access counter update failed: {err}");
                    self.sink.set_access_count(COUNT_ERROR_TEXT);
                }
            }
        } else {
            match self.api.get(&self.keys.access).await {
                Ok(count) => self.sink.set_access_count(&group_thousands(count)),
                Err(err) => {
                    warn!("access counter fetch failed: {err}");
                    self.sink.set_access_count(COUNT_ERROR_TEXT);
                }
            }
        }
    }

    // Read-only view; milestones were announced when they were hit, so this
    // path never celebrates.
    pub async fn load_like_count(&self) {
        match self.api.get(&self.keys.like).await {
            Ok(count) => {
                self.sink.clear_like_messages();
                self.sink.append_like_message(
                    MessageKind::LikeCount,
                    &format!("現在のいいね数: {}", group_thousands(count)),
                );
            }
            Err(err) => {
                warn!("like counter fetch failed: {err}");
                self.sink.clear_like_messages();
                self.sink
                    .append_like_message(MessageKind::Error, LIKE_ERROR_TEXT);
            }
        }
    }

    pub async fn handle_like_click(&self) {
        self.sink.set_like_button_enabled(false);
        match self.api.hit(&self.keys.like).await {
            Ok(count) => {
                self.sink.clear_like_messages();
                self.sink
                    .append_like_message(MessageKind::ThankYou, THANK_YOU_TEXT);
                self.sink.append_like_message(
                    MessageKind::LikeCount,
                    &format!("いいね数: {}", group_thousands(count)),
                );
                if is_repeated_digit(count) {
                    self.sink.append_like_message(MessageKind::Zorome, ZOROME_TEXT);
                    self.sink.trigger_confetti();
                }
                self.timers
                    .schedule(LIKE_COOLDOWN, DeferredAction::EnableLikeButton);
            }
            Err(err) => {
                warn!("like increment failed: {err}");
                self.sink.clear_like_messages();
                self.sink
                    .append_like_message(MessageKind::Error, LIKE_ERROR_TEXT);
                self.sink.set_like_button_enabled(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RemoteCounterError;
    use crate::models::{RenderCommand, RenderOp};
    use crate::render::CommandBuffer;
    use crate::session::MemorySessionStore;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeApi {
        hit_queue: Arc<Mutex<VecDeque<Result<u64, String>>>>,
        get_queue: Arc<Mutex<VecDeque<Result<u64, String>>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeApi {
        fn on_hit(self, result: Result<u64, &str>) -> Self {
            self.hit_queue
                .lock()
                .unwrap()
                .push_back(result.map_err(String::from));
            self
        }

        fn on_get(self, result: Result<u64, &str>) -> Self {
            self.get_queue
                .lock()
                .unwrap()
                .push_back(result.map_err(String::from));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn next(
            queue: &Mutex<VecDeque<Result<u64, String>>>,
        ) -> Result<u64, RemoteCounterError> {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected counter call")
                .map_err(RemoteCounterError::new)
        }
    }

    impl CounterApi for FakeApi {
        async fn hit(&self, key: &str) -> Result<u64, RemoteCounterError> {
            self.calls.lock().unwrap().push(format!("hit:{key}"));
            Self::next(&self.hit_queue)
        }

        async fn get(&self, key: &str) -> Result<u64, RemoteCounterError> {
            self.calls.lock().unwrap().push(format!("get:{key}"));
            Self::next(&self.get_queue)
        }
    }

    fn keys() -> CounterKeys {
        CounterKeys {
            access: "access-key".to_string(),
            like: "like-key".to_string(),
        }
    }

    fn controller(
        api: FakeApi,
        store: MemorySessionStore,
        buffer: &CommandBuffer,
    ) -> PageController<FakeApi, MemorySessionStore, CommandBuffer, CommandBuffer> {
        PageController::new(
            api,
            keys(),
            SessionGuard::new(store),
            buffer.clone(),
            buffer.clone(),
        )
    }

    fn access_text(text: &str) -> RenderCommand {
        RenderCommand::immediate(RenderOp::SetAccessCount {
            text: text.to_string(),
        })
    }

    fn like_message(kind: MessageKind, text: &str) -> RenderCommand {
        RenderCommand::immediate(RenderOp::AppendLikeMessage {
            kind,
            text: text.to_string(),
        })
    }

    #[tokio::test]
    async fn first_load_increments_and_marks_the_session() {
        let api = FakeApi::default().on_hit(Ok(42));
        let buffer = CommandBuffer::new();
        let controller = controller(api.clone(), MemorySessionStore::new(), &buffer);

        controller.load_access_counter().await;

        assert_eq!(api.calls(), vec!["hit:access-key"]);
        assert!(controller.session().is_counted());
        assert_eq!(buffer.take(), vec![access_text("42")]);
    }

    #[tokio::test]
    async fn kiriban_hit_shows_badge_and_schedules_hide() {
        let api = FakeApi::default().on_hit(Ok(2222));
        let buffer = CommandBuffer::new();
        let controller = controller(api, MemorySessionStore::new(), &buffer);

        controller.load_access_counter().await;

        assert_eq!(
            buffer.take(),
            vec![
                access_text("2,222"),
                RenderCommand::immediate(RenderOp::SetKiribanBadgeVisible { visible: true }),
                RenderCommand::deferred(
                    RenderOp::SetKiribanBadgeVisible { visible: false },
                    5000,
                ),
            ]
        );
    }

    #[tokio::test]
    async fn counted_session_reads_without_celebration() {
        let api = FakeApi::default().on_get(Ok(3333));
        let buffer = CommandBuffer::new();
        let controller = controller(api.clone(), MemorySessionStore::counted(), &buffer);

        controller.load_access_counter().await;

        assert_eq!(api.calls(), vec!["get:access-key"]);
        assert_eq!(buffer.take(), vec![access_text("3,333")]);
    }

    #[tokio::test]
    async fn access_failure_renders_the_placeholder() {
        let api = FakeApi::default().on_hit(Err("boom"));
        let buffer = CommandBuffer::new();
        let controller = controller(api, MemorySessionStore::new(), &buffer);

        controller.load_access_counter().await;

        assert_eq!(buffer.take(), vec![access_text(COUNT_ERROR_TEXT)]);
    }

    #[tokio::test]
    async fn like_load_renders_the_current_count() {
        let api = FakeApi::default().on_get(Ok(1500));
        let buffer = CommandBuffer::new();
        let controller = controller(api.clone(), MemorySessionStore::new(), &buffer);

        controller.load_like_count().await;

        assert_eq!(api.calls(), vec!["get:like-key"]);
        assert_eq!(
            buffer.take(),
            vec![
                RenderCommand::immediate(RenderOp::ClearLikeMessages),
                like_message(MessageKind::LikeCount, "現在のいいね数: 1,500"),
            ]
        );
    }

    #[tokio::test]
    async fn like_load_never_celebrates() {
        let api = FakeApi::default().on_get(Ok(7777));
        let buffer = CommandBuffer::new();
        let controller = controller(api, MemorySessionStore::new(), &buffer);

        controller.load_like_count().await;

        let commands = buffer.take();
        assert!(!commands.contains(&RenderCommand::immediate(RenderOp::TriggerConfetti)));
        assert_eq!(
            commands[1],
            like_message(MessageKind::LikeCount, "現在のいいね数: 7,777"),
        );
    }

    #[tokio::test]
    async fn like_load_failure_renders_the_error_message() {
        let api = FakeApi::default().on_get(Err("down"));
        let buffer = CommandBuffer::new();
        let controller = controller(api, MemorySessionStore::new(), &buffer);

        controller.load_like_count().await;

        assert_eq!(
            buffer.take(),
            vec![
                RenderCommand::immediate(RenderOp::ClearLikeMessages),
                like_message(MessageKind::Error, LIKE_ERROR_TEXT),
            ]
        );
    }

    #[tokio::test]
    async fn like_click_disables_then_schedules_the_cooldown() {
        let api = FakeApi::default().on_hit(Ok(12));
        let buffer = CommandBuffer::new();
        let controller = controller(api.clone(), MemorySessionStore::new(), &buffer);

        controller.handle_like_click().await;

        assert_eq!(api.calls(), vec!["hit:like-key"]);
        assert_eq!(
            buffer.take(),
            vec![
                RenderCommand::immediate(RenderOp::SetLikeButtonEnabled { enabled: false }),
                RenderCommand::immediate(RenderOp::ClearLikeMessages),
                like_message(MessageKind::ThankYou, THANK_YOU_TEXT),
                like_message(MessageKind::LikeCount, "いいね数: 12"),
                RenderCommand::deferred(RenderOp::SetLikeButtonEnabled { enabled: true }, 3000),
            ]
        );
    }

    #[tokio::test]
    async fn kiriban_like_triggers_the_confetti() {
        let api = FakeApi::default().on_hit(Ok(2222));
        let buffer = CommandBuffer::new();
        let controller = controller(api, MemorySessionStore::new(), &buffer);

        controller.handle_like_click().await;

        let commands = buffer.take();
        assert!(commands.contains(&like_message(MessageKind::Zorome, ZOROME_TEXT)));
        assert!(commands.contains(&RenderCommand::immediate(RenderOp::TriggerConfetti)));
        assert_eq!(
            *commands.last().unwrap(),
            RenderCommand::deferred(RenderOp::SetLikeButtonEnabled { enabled: true }, 3000),
        );
    }

    #[tokio::test]
    async fn like_failure_reenables_the_button_immediately() {
        let api = FakeApi::default().on_hit(Err("boom"));
        let buffer = CommandBuffer::new();
        let controller = controller(api, MemorySessionStore::new(), &buffer);

        controller.handle_like_click().await;

        assert_eq!(
            buffer.take(),
            vec![
                RenderCommand::immediate(RenderOp::SetLikeButtonEnabled { enabled: false }),
                RenderCommand::immediate(RenderOp::ClearLikeMessages),
                like_message(MessageKind::Error, LIKE_ERROR_TEXT),
                RenderCommand::immediate(RenderOp::SetLikeButtonEnabled { enabled: true }),
            ]
        );
    }

    #[tokio::test]
    async fn page_load_runs_both_fetches() {
        let api = FakeApi::default().on_hit(Ok(5)).on_get(Ok(1500));
        let buffer = CommandBuffer::new();
        let controller = controller(api.clone(), MemorySessionStore::new(), &buffer);

        controller.handle_page_load().await;

        assert_eq!(api.calls(), vec!["hit:access-key", "get:like-key"]);
        let commands = buffer.take();
        assert!(commands.contains(&access_text("5")));
        assert!(commands.contains(&like_message(MessageKind::LikeCount, "現在のいいね数: 1,500")));
    }
}
