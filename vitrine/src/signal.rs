use tokio_util::sync::CancellationToken;

#[cfg(target_family = "unix")]
use tokio::signal::unix::SignalKind;

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(target_family = "unix")]
    let terminate = async {
        tokio::signal::unix::signal(SignalKind::terminate())
            .expect("Failed to install the SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(target_family = "unix"))]
    let terminate = std::future::pending();

    tokio::select! {
        _ = ctrl_c => (),
        () = terminate => (),
    }
}

#[derive(Clone)]
pub struct Receiver {
    inner: CancellationToken,
}

impl Receiver {
    pub async fn wait(self) {
        self.inner.cancelled_owned().await;
    }
}

#[must_use]
pub fn shutdown() -> Receiver {
    let notifier = CancellationToken::new();

    {
        let notifier = notifier.clone();

        tokio::spawn(async move {
            shutdown_signal().await;
            notifier.cancel();
        });
    }

    Receiver { inner: notifier }
}
