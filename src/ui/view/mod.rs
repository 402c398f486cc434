//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode, FormField};
use components::{render_dialog_framework, render_field_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    // 加载中 / 出错时整个视图被单条消息替换
    if app.is_loading {
        render_fullscreen_message(frame, "Loading...", Color::Yellow);
        return;
    }
    if app.is_error() {
        render_fullscreen_message(frame, "Something went wrong...", Color::Red);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 列表
            Constraint::Length(6), // 详情
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_post_list(frame, app, chunks[1]);
    render_details(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染弹窗
    match &app.mode {
        AppMode::Form => render_form_dialog(frame, app),
        AppMode::ConfirmDelete(_) => render_confirm_dialog(frame),
        AppMode::Normal => {}
    }
}

fn render_fullscreen_message(frame: &mut Frame, text: &str, color: Color) {
    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, frame.area());
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📮 Posts")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_post_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let editing_marker = if app.edit_id == Some(post.post_id) {
                " (editing)"
            } else {
                ""
            };
            let content = format!("#{} {}{}", post.post_id, post.title, editing_marker);

            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![Span::styled(content, style)]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().title("文章列表").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(post) = app.selected_post() {
        format!("标题: {}\n正文: {}", post.title, post.body)
    } else {
        "暂无文章，按 'c' 创建第一篇".to_string()
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("详情").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => "[c] 新建/表单  [e] 编辑  [d] 删除  [j/k] 导航  [q] 退出",
        AppMode::Form => match app.form_field {
            FormField::Title => "输入标题后按 [Enter] 继续  [Tab] 切换字段  [Esc] 关闭",
            FormField::Body => "输入正文后按 [Enter] 提交  [Tab] 切换字段  [Esc] 关闭",
        },
        AppMode::ConfirmDelete(_) => "[y] 确认  [n] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_form_dialog(frame: &mut Frame, app: &App) {
    let dialog_title = if app.is_editing {
        "Update Post"
    } else {
        "Create Post"
    };
    let area = centered_rect(60, 50, frame.area());
    let inner = render_dialog_framework(frame, area, dialog_title);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
        ])
        .split(inner);

    render_field_widget(
        frame,
        chunks[0],
        "标题",
        &app.draft.title,
        app.form_field == FormField::Title,
    );

    render_field_widget(
        frame,
        chunks[1],
        "正文",
        &app.draft.body,
        app.form_field == FormField::Body,
    );

    let hint = match app.form_field {
        FormField::Title => "输入标题后按 Enter 继续",
        FormField::Body => "输入正文后按 Enter 提交",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

fn render_confirm_dialog(frame: &mut Frame) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new("确认删除这篇文章？\n\n[y] 确认  [n] 取消")
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("⚠️ 确认操作").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
