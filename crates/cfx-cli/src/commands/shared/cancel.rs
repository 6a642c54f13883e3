use std::future::Future;

use cfx_ai::CancelHandle;

/// Drive `fut` to completion, cancelling `handle` if Ctrl-C arrives first.
///
/// After cancelling, `fut` is still awaited so it can observe the token and
/// unwind; the caller sees its `Cancelled` result.
pub async fn until_ctrl_c<F: Future>(handle: &CancelHandle, fut: F) -> F::Output {
    tokio::pin!(fut);
    tokio::select! {
        output = &mut fut => output,
        signal = tokio::signal::ctrl_c() => {
            if signal.is_ok() {
                tracing::info!("Ctrl-C received, cancelling AI request");
                handle.cancel();
            }
            fut.await
        }
    }
}
