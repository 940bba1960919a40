//! Integration tests for the public emitter API.

use std::time::Duration;

use asyncemit::{
    AsyncEventEmitter, BoxError, EmitterError, EventName, Handler, HandlerFn, HandlerFuture,
    HandlerRef, SyncHandlerFn,
};
use futures::FutureExt;

type Emitter = AsyncEventEmitter<String, String>;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn prefix_async(prefix: &'static str) -> HandlerRef<String, String> {
    HandlerFn::arc(move |s: String| async move { Ok::<_, BoxError>(format!("{prefix}{s}")) })
}

fn prefix_sync(prefix: &'static str) -> HandlerRef<String, String> {
    SyncHandlerFn::arc(move |s: String| Ok::<_, BoxError>(format!("{prefix}{s}")))
}

fn delayed(ms: u64, prefix: &'static str) -> HandlerRef<String, String> {
    HandlerFn::arc(move |s: String| async move {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok::<_, BoxError>(format!("{prefix}{s}"))
    })
}

fn is_bad_name(err: EmitterError) -> bool {
    matches!(err, EmitterError::InvalidEventName { .. })
}

#[derive(Debug, PartialEq)]
struct Boom(&'static str);

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boom: {}", self.0)
    }
}

impl std::error::Error for Boom {}

// ---------------------------------------------------------------------------
// on()
// ---------------------------------------------------------------------------

#[test]
fn on_rejects_empty_event_name() {
    let emitter = Emitter::new();
    let err = emitter.on("", prefix_sync("bar")).unwrap_err();

    assert!(is_bad_name(err.clone()));
    assert!(err.to_string().starts_with("Expected a non-empty string"));
    assert!(emitter.event_names().is_empty());
}

#[test]
fn on_accepts_validated_names() {
    let emitter = Emitter::new();
    let name = EventName::new("foo").unwrap();

    emitter.on(&name, prefix_sync("bar")).unwrap();
    assert_eq!(emitter.listener_count("foo").unwrap(), 1);
    assert_eq!(emitter.event_names(), vec![name]);
}

// ---------------------------------------------------------------------------
// emit()
// ---------------------------------------------------------------------------

#[test]
fn emit_rejects_empty_event_name() {
    let emitter = Emitter::new();
    assert!(is_bad_name(emitter.emit("", String::new()).unwrap_err()));
}

#[tokio::test]
async fn emit_without_handlers_resolves_empty() {
    let emitter = Emitter::new();
    let result = emitter.emit("foo", String::new()).unwrap().await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn emit_calls_async_handler() {
    let emitter: AsyncEventEmitter<(), &'static str> = AsyncEventEmitter::new();
    emitter
        .on("foo", HandlerFn::arc(|_: ()| async { Ok::<_, BoxError>("bar") }))
        .unwrap();

    assert_eq!(emitter.emit("foo", ()).unwrap().await.unwrap(), ["bar"]);
}

#[tokio::test]
async fn emit_calls_multiple_async_handlers_with_arguments() {
    let emitter = Emitter::new();
    emitter.on("foo", prefix_async("bar")).unwrap();
    emitter.on("foo", prefix_async("baz")).unwrap();

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert_eq!(result, ["barx", "bazx"]);
}

#[tokio::test]
async fn emit_calls_multiple_sync_handlers_with_arguments() {
    let emitter = Emitter::new();
    emitter.on("foo", prefix_sync("bar")).unwrap();
    emitter.on("foo", prefix_sync("baz")).unwrap();

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert_eq!(result, ["barx", "bazx"]);
}

#[tokio::test]
async fn emit_mixes_sync_and_async_handlers() {
    let emitter = Emitter::new();
    emitter.on("foo", prefix_sync("bar")).unwrap();
    emitter.on("foo", prefix_async("baz")).unwrap();

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert_eq!(result, ["barx", "bazx"]);
}

#[tokio::test]
async fn emit_keeps_registration_order_when_first_handler_is_slower() {
    let emitter = Emitter::new();
    emitter.on("foo", delayed(50, "slow")).unwrap();
    emitter.on("foo", delayed(1, "fast")).unwrap();

    let result = emitter.emit("foo", "!".into()).unwrap().await.unwrap();
    assert_eq!(result, ["slow!", "fast!"]);
}

#[tokio::test]
async fn emit_does_not_cross_invoke_events() {
    let emitter = Emitter::new();
    emitter.on("foo1", prefix_sync("bar")).unwrap();
    emitter.on("foo2", prefix_sync("baz")).unwrap();

    let result1 = emitter.emit("foo1", "x".into()).unwrap().await.unwrap();
    let result2 = emitter.emit("foo2", "x".into()).unwrap().await.unwrap();

    assert_eq!(result1, ["barx"]);
    assert_eq!(result2, ["bazx"]);
}

#[tokio::test]
async fn emit_invokes_duplicate_registrations_once_each() {
    let emitter = Emitter::new();
    let h = prefix_sync("bar");
    emitter.on("foo", h.clone()).unwrap();
    emitter.on("foo", h).unwrap();

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert_eq!(result, ["barx", "barx"]);
}

#[tokio::test]
async fn emit_fails_with_handler_error() {
    let emitter: AsyncEventEmitter<(), u8, Boom> = AsyncEventEmitter::new();
    emitter
        .on(
            "foo",
            HandlerFn::arc(|_: ()| async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok::<u8, Boom>(1)
            }),
        )
        .unwrap();
    emitter
        .on("foo", SyncHandlerFn::arc(|_: ()| Err::<u8, _>(Boom("second"))))
        .unwrap();

    let err = emitter.emit("foo", ()).unwrap().await.unwrap_err();
    assert_eq!(err, Boom("second"));
}

#[tokio::test]
async fn emit_fails_with_async_rejection() {
    let emitter = Emitter::new();
    emitter.on("foo", prefix_async("bar")).unwrap();
    emitter
        .on(
            "foo",
            HandlerFn::arc(|_: String| async move {
                tokio::task::yield_now().await;
                Err::<String, BoxError>(Box::new(Boom("rejected")))
            }),
        )
        .unwrap();

    let err = emitter.emit("foo", "x".into()).unwrap().await.unwrap_err();
    assert_eq!(err.to_string(), "boom: rejected");
}

// ---------------------------------------------------------------------------
// off()
// ---------------------------------------------------------------------------

#[tokio::test]
async fn off_removes_handler() {
    let emitter = Emitter::new();
    let handler = prefix_async("bar");

    emitter.on("foo", handler.clone()).unwrap();
    emitter.off("foo", &handler).unwrap();

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert!(result.is_empty());
    assert_eq!(emitter.listener_count("foo").unwrap(), 0);
}

#[tokio::test]
async fn off_decrements_count_by_one() {
    let emitter = Emitter::new();
    let bar = prefix_sync("bar");
    let baz = prefix_sync("baz");
    emitter.on("foo", bar.clone()).unwrap();
    emitter.on("foo", baz).unwrap();

    emitter.off("foo", &bar).unwrap();
    assert_eq!(emitter.listener_count("foo").unwrap(), 1);

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert_eq!(result, ["bazx"]);
}

#[test]
fn off_unknown_handler_or_event_is_noop() {
    let emitter = Emitter::new();
    let registered = prefix_sync("bar");
    let stranger = prefix_sync("bar");
    emitter.on("foo", registered).unwrap();

    emitter.off("foo", &stranger).unwrap();
    emitter.off("never-used", &stranger).unwrap();

    assert_eq!(emitter.listener_count("foo").unwrap(), 1);
    assert_eq!(emitter.listener_count("never-used").unwrap(), 0);
    assert_eq!(emitter.event_names().len(), 1);
}

#[test]
fn off_rejects_empty_event_name() {
    let emitter = Emitter::new();
    let h = prefix_sync("bar");
    emitter.on("foo", h.clone()).unwrap();

    assert!(is_bad_name(emitter.off("", &h).unwrap_err()));
    assert_eq!(emitter.listener_count("foo").unwrap(), 1);
}

#[test]
fn off_keeps_emptied_event_known() {
    let emitter = Emitter::new();
    let h = prefix_sync("bar");
    emitter.on("foo", h.clone()).unwrap();
    emitter.off("foo", &h).unwrap();

    assert_eq!(emitter.listener_count("foo").unwrap(), 0);
    assert_eq!(emitter.event_names(), vec![EventName::new("foo").unwrap()]);
}

// ---------------------------------------------------------------------------
// listener_count()
// ---------------------------------------------------------------------------

#[test]
fn listener_count_is_zero_without_handlers() {
    let emitter = Emitter::new();
    assert_eq!(emitter.listener_count("foo").unwrap(), 0);
}

#[test]
fn listener_count_tracks_registrations() {
    let emitter = Emitter::new();

    emitter.on("foo", prefix_async("bar")).unwrap();
    assert_eq!(emitter.listener_count("foo").unwrap(), 1);

    emitter.on("foo", prefix_async("baz")).unwrap();
    assert_eq!(emitter.listener_count("foo").unwrap(), 2);
}

#[test]
fn listener_count_rejects_empty_event_name() {
    let emitter = Emitter::new();
    assert!(is_bad_name(emitter.listener_count("").unwrap_err()));
}

// ---------------------------------------------------------------------------
// Custom handler types
// ---------------------------------------------------------------------------

struct Shout;

impl Handler<String, String> for Shout {
    fn call(&self, s: String) -> HandlerFuture<String> {
        async move { Ok::<_, BoxError>(s.to_uppercase()) }.boxed()
    }
}

#[tokio::test]
async fn custom_handler_type_is_accepted() {
    let emitter = Emitter::new();
    let shout: HandlerRef<String, String> = std::sync::Arc::new(Shout);
    emitter.on("foo", shout.clone()).unwrap();
    emitter.on("foo", prefix_sync("bar")).unwrap();

    let result = emitter.emit("foo", "x".into()).unwrap().await.unwrap();
    assert_eq!(result, ["X", "barx"]);

    emitter.off("foo", &shout).unwrap();
    assert_eq!(emitter.listener_count("foo").unwrap(), 1);
}
