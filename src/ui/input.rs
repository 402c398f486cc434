//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('c') => Some(Action::OpenForm),
            KeyCode::Char('e') => Some(Action::StartEditPost),
            KeyCode::Char('d') => Some(Action::StartDeletePost),
            _ => None,
        },
        AppMode::Form => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::ConfirmDelete(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(
            get_action(&AppMode::Normal, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            get_action(&AppMode::Normal, KeyCode::Char('c')),
            Some(Action::OpenForm)
        );
        assert_eq!(
            get_action(&AppMode::Normal, KeyCode::Char('e')),
            Some(Action::StartEditPost)
        );
        assert_eq!(get_action(&AppMode::Normal, KeyCode::Enter), None);
    }

    #[test]
    fn test_form_mode_keys() {
        assert_eq!(
            get_action(&AppMode::Form, KeyCode::Char('q')),
            Some(Action::Input('q'))
        );
        assert_eq!(get_action(&AppMode::Form, KeyCode::Tab), Some(Action::NextField));
        assert_eq!(get_action(&AppMode::Form, KeyCode::Esc), Some(Action::Cancel));
    }

    #[test]
    fn test_confirm_mode_keys() {
        assert_eq!(
            get_action(&AppMode::ConfirmDelete(1), KeyCode::Char('y')),
            Some(Action::Submit)
        );
        assert_eq!(
            get_action(&AppMode::ConfirmDelete(1), KeyCode::Esc),
            Some(Action::Cancel)
        );
    }
}
