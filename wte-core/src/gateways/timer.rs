use std::time::Duration;

pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

impl<T: Timer> Timer for &T {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}
