//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run a blocking function (scan, sync) on a background thread and await the
/// result, so the iced event loop never blocks on disk or network IO.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> T + Send + 'static) -> T
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<T>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .expect("background worker dropped without returning")
}
