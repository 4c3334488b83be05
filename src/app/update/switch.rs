//! Switch input handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::switch::{Outcome, SwitchState};
use crate::ui::primitives::PressEvent;
use crate::ui::widgets::Toast;

impl App {
    /// Handle switch input and frame ticks
    pub fn handle_switch(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Press(event) => {
                let now = Instant::now();
                let switch = &mut self.core.switch;
                let outcome = match *event {
                    PressEvent::Began(position) => switch.press_begin(position, now),
                    PressEvent::Moved(position) => switch.press_move(position, now),
                    PressEvent::Ended => switch.press_end(now),
                    PressEvent::Cancelled => switch.abort(),
                };
                Some(self.record_outcome(outcome))
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.tick(now);
                let outcome = self.core.switch.tick(now);
                Some(self.record_outcome(outcome))
            }

            Message::HoverChanged(hovered) => {
                self.ui.hover.set_hovered(*hovered);
                Some(Task::none())
            }

            Message::SetOn(is_on) => {
                if self.core.switch.set_on(*is_on) {
                    self.core.settings.switch.is_on = *is_on;
                    Some(Task::done(Message::SaveSettings))
                } else {
                    Some(Task::none())
                }
            }

            _ => None,
        }
    }

    /// Remember what the last input did; completed toggles are persisted
    fn record_outcome(&mut self, outcome: Outcome) -> Task<Message> {
        if outcome == Outcome::Ignored || outcome == Outcome::Held {
            return Task::none();
        }
        self.ui.last_outcome = Some(outcome);

        match outcome {
            Outcome::Completed(state) => {
                self.ui.toggle_count += 1;
                self.core.settings.switch.is_on = state.is_on();
                let notice = match state {
                    SwitchState::On => "Switched on",
                    SwitchState::Off => "Switched off",
                };
                Task::batch([
                    self.show_toast(Toast::success(notice)),
                    Task::done(Message::SaveSettings),
                ])
            }
            _ => Task::none(),
        }
    }
}
