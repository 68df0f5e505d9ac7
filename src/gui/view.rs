//! GUI renderer (reads state, produces widgets; no mutation).

use iced::widget::{Column, Row, button, column, mouse_area, row, scrollable, text};
use iced::{Element, Length};

use super::state::{Litania, Message, UiCue};

const TITLE_TEXT: f32 = 24.0;
const BODY_TEXT: f32 = 16.0;

pub(crate) fn view(state: &Litania) -> Column<'_, Message> {
    let controls = build_controls(state);
    let list = build_litany_list(state);
    let panel = build_text_panel(state);

    let body = row![
        list.width(Length::FillPortion(1)),
        panel.width(Length::FillPortion(2)),
    ]
    .spacing(12)
    .height(Length::Fill);

    column![
        text("Litania").size(TITLE_TEXT),
        text(&state.status),
        controls,
        body,
    ]
    .spacing(12)
    .padding(12)
}

/// Control row. The three cue-bearing controls are wrapped in a mouse_area so
/// hover enter/exit plays/stops the matching cue clip.
fn build_controls(state: &Litania) -> Row<'_, Message> {
    let recite = with_cue(
        button("Recite").on_press(Message::RecitePressed),
        UiCue::Recite,
    );

    // No refresh while a sync is in flight (no on_press = inert button).
    let refresh_btn = if state.syncing {
        button("Refreshing...")
    } else {
        button("Refresh").on_press(Message::RefreshPressed)
    };
    let refresh = with_cue(refresh_btn, UiCue::Refresh);

    let random = with_cue(
        button("Random").on_press(Message::RandomPressed),
        UiCue::Random,
    );

    let clear = button("Clear").on_press(Message::ClearPressed);

    row![recite, refresh, random, clear].spacing(8)
}

fn with_cue<'a>(
    btn: iced::widget::Button<'a, Message>,
    cue: UiCue,
) -> Element<'a, Message> {
    mouse_area(btn)
        .on_enter(Message::HoverCue(cue))
        .on_exit(Message::HoverEnded)
        .into()
}

fn build_litany_list(state: &Litania) -> iced::widget::Scrollable<'_, Message> {
    let mut list = column![];

    if state.assets.is_empty() {
        list = list.push(text("No litanies yet. Press Refresh."));
    }

    for (i, asset) in state.assets.iter().enumerate() {
        let prefix = if state.selected == Some(i) { "▶ " } else { "  " };

        list = list.push(
            button(text(format!("{prefix}{}", asset.name)))
                .width(Length::Fill)
                .on_press(Message::LitanyPressed(i)),
        );
    }

    scrollable(list.spacing(6)).height(Length::Fill)
}

fn build_text_panel(state: &Litania) -> iced::widget::Scrollable<'_, Message> {
    scrollable(text(&state.litany_text).size(BODY_TEXT)).height(Length::Fill)
}
