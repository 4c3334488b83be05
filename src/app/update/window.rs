//! Window and notification message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                // a press cannot outlive the window
                self.core.switch.abort();
                tracing::info!("Close requested, exiting");
                Some(iced::exit())
            }

            Message::HideToast(generation) => {
                self.ui.expire_toast(*generation);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Show a toast and schedule its removal
    pub fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        let lifetime = toast.style.lifetime();
        let generation = self.ui.push_toast(toast);
        Task::perform(
            async move {
                tokio::time::sleep(lifetime).await;
            },
            move |_| Message::HideToast(generation),
        )
    }
}
