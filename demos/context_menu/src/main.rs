use dynamic_context_menu::{MenuItem, Placement, context_menu};
use iced::widget::{button, column, container, row, text};
use iced::{Center, Element, Fill};

pub fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view).run()
}

struct App {
    entries: Vec<String>,
    last_action: String,
    clamp: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            entries: ["notes.txt", "budget.ods", "photo.png"]
                .into_iter()
                .map(String::from)
                .collect(),
            last_action: String::new(),
            clamp: false,
        }
    }
}

#[derive(Debug, Clone)]
enum Message {
    Rename(usize),
    Duplicate(usize),
    Delete(usize),
    MenuShown,
    ToggleClamp,
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::Rename(index) => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.insert_str(0, "renamed-");
                    self.last_action = format!("Renamed to {entry}");
                }
            }
            Message::Duplicate(index) => {
                if let Some(entry) = self.entries.get(index).cloned() {
                    self.last_action = format!("Duplicated {entry}");
                    self.entries.insert(index + 1, format!("copy of {entry}"));
                }
            }
            Message::Delete(index) => {
                if index < self.entries.len() {
                    let entry = self.entries.remove(index);
                    self.last_action = format!("Deleted {entry}");
                }
            }
            Message::MenuShown => {
                self.last_action = "Menu opened".to_owned();
            }
            Message::ToggleClamp => {
                self.clamp = !self.clamp;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let placement = if self.clamp {
            Placement::FlipAndClamp
        } else {
            Placement::Flip
        };

        let entries = self.entries.iter().enumerate().map(|(index, entry)| {
            context_menu(
                container(text(entry).size(18)).padding(12).width(Fill),
                index,
                vec![
                    MenuItem::new("Rename", |index: &usize, _| Message::Rename(*index)),
                    MenuItem::new("Duplicate", |index: &usize, _| {
                        Message::Duplicate(*index)
                    })
                    .class("primary"),
                    MenuItem::new("Delete", |index: &usize, _| Message::Delete(*index))
                        .class("danger"),
                ],
            )
            .placement(placement)
            .on_context_menu(Message::MenuShown)
            .into()
        });

        let status = if self.last_action.is_empty() {
            text("Right-click an entry")
        } else {
            text(&self.last_action)
        };

        let content = column![
            text("Context Menu Example").size(30),
            row![
                button(if self.clamp { "Clamp: on" } else { "Clamp: off" })
                    .on_press(Message::ToggleClamp),
                status,
            ]
            .spacing(20)
            .align_y(Center),
            column(entries).spacing(4).width(400),
        ]
        .spacing(20)
        .align_x(Center);

        container(content).center(Fill).into()
    }
}
