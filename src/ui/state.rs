//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::api::{ApiError, PostsApi};
use crate::models::{Post, PostDraft};

/// 应用状态
pub struct App {
    pub api: Box<dyn PostsApi>,
    /// 上一次成功同步（或本地修补）后的文章列表
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub last_error: Option<ApiError>,
    pub draft: PostDraft,
    pub is_editing: bool,
    pub edit_id: Option<u64>,
    pub selected_index: usize,
    pub mode: AppMode,
    pub form_field: FormField,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    /// 表单弹窗（创建或编辑由 is_editing 区分）
    Form,
    /// 删除确认，u64 是目标文章的 post_id
    ConfirmDelete(u64),
}

/// 表单字段类型
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Title,
    Body,
}

impl App {
    /// 创建新的应用实例
    pub fn new(api: Box<dyn PostsApi>) -> Self {
        Self {
            api,
            posts: Vec::new(),
            is_loading: false,
            last_error: None,
            draft: PostDraft::default(),
            is_editing: false,
            edit_id: None,
            selected_index: 0,
            mode: AppMode::Normal,
            form_field: FormField::Title,
            message: None,
        }
    }

    /// 是否处于错误状态
    pub fn is_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// 获取当前选中的文章
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected_index)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.posts.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.posts.len() {
            self.selected_index = self.posts.len() - 1;
        }
    }
}
