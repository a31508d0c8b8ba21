use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::{Control, ScreenState};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::FocusNext => ScreenState {
                focused: state.focused.next(),
                ..state
            },
            ScreenIntent::FocusPrev => ScreenState {
                focused: state.focused.prev(),
                ..state
            },
            ScreenIntent::TypeChar(c) => match state.focused {
                Control::PathInput => {
                    let ScreenState {
                        focused,
                        mut path_input,
                    } = state;
                    path_input.push(c);
                    ScreenState { focused, path_input }
                }
                _ => state,
            },
            ScreenIntent::Backspace => match state.focused {
                Control::PathInput => {
                    let ScreenState {
                        focused,
                        mut path_input,
                    } = state;
                    path_input.pop();
                    ScreenState { focused, path_input }
                }
                _ => state,
            },
            ScreenIntent::SetInput(path_input) => ScreenState {
                path_input,
                ..state
            },
        }
    }
}
