//! Execution contexts for dispatched actions: a dedicated UI-affine thread
//! and a background worker pool, mirroring the host runtime's threading
//! model.
use crossbeam::channel::{unbounded, Sender};
use tokio::runtime::{Builder, Runtime};

type Task = Box<dyn FnOnce() + Send>;

pub struct Scheduler {
    ui_tx: Sender<Task>,
    workers: Runtime,
}

impl Scheduler {
    pub fn new() -> std::io::Result<Self> {
        let (ui_tx, ui_rx) = unbounded::<Task>();
        // The thread exits when the sender side is dropped with the bridge.
        std::thread::Builder::new()
            .name("vwo-bridge-ui".to_string())
            .spawn(move || {
                while let Ok(task) = ui_rx.recv() {
                    task();
                }
            })?;
        let workers = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("vwo-bridge-worker")
            .build()?;
        Ok(Scheduler { ui_tx, workers })
    }

    /// Runs `task` on the UI-affine thread, in submission order. A task is
    /// allowed to block; later tasks wait behind it.
    pub fn run_on_ui(&self, task: impl FnOnce() + Send + 'static) {
        // Send only fails when the UI thread is gone, i.e. during teardown.
        let _ = self.ui_tx.send(Box::new(task));
    }

    /// Runs `task` on the background worker pool.
    pub fn run_in_background(&self, task: impl FnOnce() + Send + 'static) {
        self.workers.spawn_blocking(task);
    }
}
