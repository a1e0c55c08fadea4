use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::device::{FetchedConfig, FileList};
use crate::error::Result;

/// The frequency at which tick events are emitted.
const TICK_FPS: f64 = 30.0;

/// Representation of all possible events.
#[derive(Debug)]
pub enum Event {
    /// An event that is emitted on a regular schedule.
    Tick,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug)]
pub enum AppEvent {
    Quit,

    /// A device request finished; `seq` identifies which issue of it
    Device { seq: u64, outcome: DeviceOutcome },
}

/// The device operations the UI can have in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    GetConfig,
    SetConfig,
    ListFiles,
    RemoveFile,
    UploadFiles,
    Restart,
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GetConfig => "Get config",
            Self::SetConfig => "Set config",
            Self::ListFiles => "Get filelist",
            Self::RemoveFile => "Remove file",
            Self::UploadFiles => "Upload",
            Self::Restart => "Restart",
        }
    }

    /// Reads whose answer is stale once a newer read of the same kind is out
    pub fn is_supersedable(&self) -> bool {
        matches!(self, Self::GetConfig | Self::ListFiles)
    }
}

/// Result of one device request, as delivered back to the UI task
#[derive(Debug)]
pub enum DeviceOutcome {
    Config(Result<FetchedConfig>),
    ConfigSent(Result<String>),
    Files(Result<FileList>),
    FileRemoved { filename: String, result: Result<String> },
    Uploaded { paths: Vec<PathBuf>, sizes: Vec<u64>, result: Result<String> },
    Restarted(Result<String>),
}

impl DeviceOutcome {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Config(_) => RequestKind::GetConfig,
            Self::ConfigSent(_) => RequestKind::SetConfig,
            Self::Files(_) => RequestKind::ListFiles,
            Self::FileRemoved { .. } => RequestKind::RemoveFile,
            Self::Uploaded { .. } => RequestKind::UploadFiles,
            Self::Restarted(_) => RequestKind::Restart,
        }
    }
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Terminal reader, absent while suspended or when detached
    task: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns a task reading terminal events.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut handler = Self { sender, receiver, task: None };
        handler.resume();
        handler
    }

    /// Channel pair without the terminal reader, for driving the app without a tty
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver, task: None }
    }

    /// Stop reading the terminal so a child process gets the keyboard
    pub fn suspend(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Start (or restart) the terminal reader
    pub fn resume(&mut self) {
        self.suspend();
        let actor = EventTask::new(self.sender.clone());
        self.task = Some(tokio::spawn(async {
            let _ = actor.run().await;
        }));
    }

    /// Receives an event from the sender.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Non-blocking receive
    pub fn try_next(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }

    /// Sender for tasks that report back later
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

/// A task that reads crossterm events and emits tick events on a regular schedule.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    /// Constructs a new instance of [`EventTask`].
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    /// Runs the event loop.
    async fn run(self) -> color_eyre::Result<()> {
        let tick_rate = Duration::from_secs_f64(1.0 / TICK_FPS);

        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}
