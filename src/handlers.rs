use crate::client::CounterClient;
use crate::controller::PageController;
use crate::models::{CommandsResponse, VisitRequest, VisitResponse};
use crate::render::CommandBuffer;
use crate::session::{MemorySessionStore, SessionGuard};
use crate::state::AppState;
use crate::ui;
use axum::{extract::State, response::Html, Json};

type WidgetController =
    PageController<CounterClient, MemorySessionStore, CommandBuffer, CommandBuffer>;

pub async fn index() -> Html<&'static str> {
    Html(ui::widget_page())
}

// The page reports whether this browser session already counted itself; the
// reply carries the flag to persist back into session storage.
pub async fn visit(
    State(state): State<AppState>,
    Json(request): Json<VisitRequest>,
) -> Json<VisitResponse> {
    let store = if request.counted {
        MemorySessionStore::counted()
    } else {
        MemorySessionStore::new()
    };
    let buffer = CommandBuffer::new();
    let controller = widget_controller(&state, store, &buffer);

    controller.load_access_counter().await;

    let counted = controller.session().is_counted();
    Json(VisitResponse {
        commands: buffer.take(),
        counted,
    })
}

pub async fn like_count(State(state): State<AppState>) -> Json<CommandsResponse> {
    let buffer = CommandBuffer::new();
    let controller = widget_controller(&state, MemorySessionStore::new(), &buffer);

    controller.load_like_count().await;

    Json(CommandsResponse {
        commands: buffer.take(),
    })
}

pub async fn like(State(state): State<AppState>) -> Json<CommandsResponse> {
    let buffer = CommandBuffer::new();
    let controller = widget_controller(&state, MemorySessionStore::new(), &buffer);

    controller.handle_like_click().await;

    Json(CommandsResponse {
        commands: buffer.take(),
    })
}

fn widget_controller(
    state: &AppState,
    store: MemorySessionStore,
    buffer: &CommandBuffer,
) -> WidgetController {
    PageController::new(
        state.client.clone(),
        state.keys.clone(),
        SessionGuard::new(store),
        buffer.clone(),
        buffer.clone(),
    )
}
