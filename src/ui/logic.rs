//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和四个网络操作的状态同步规则

use super::actions::Action;
use super::state::{App, AppMode, FormField};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::OpenForm => self.open_form(),
            Action::StartEditPost => self.start_edit_post(),
            Action::StartDeletePost => self.start_delete_post(),

            Action::Cancel => self.cancel(),

            Action::Submit => match &self.mode {
                AppMode::Form => match self.form_field {
                    FormField::Title => {
                        if !self.draft.title.is_empty() {
                            self.form_field = FormField::Body;
                        }
                    }
                    FormField::Body => self.submit_form(),
                },
                AppMode::ConfirmDelete(id) => {
                    let id = *id;
                    self.mode = AppMode::Normal;
                    self.delete_post(id);
                }
                AppMode::Normal => {}
            },

            Action::NextField => {
                if self.mode == AppMode::Form {
                    self.form_field = match self.form_field {
                        FormField::Title => FormField::Body,
                        FormField::Body => FormField::Title,
                    };
                }
            }

            Action::Input(c) => {
                if self.mode == AppMode::Form {
                    self.focused_field_mut().push(c);
                }
            }

            Action::DeleteChar => {
                if self.mode == AppMode::Form {
                    self.focused_field_mut().pop();
                }
            }
        }
        false
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.form_field {
            FormField::Title => &mut self.draft.title,
            FormField::Body => &mut self.draft.body,
        }
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.posts.len() {
            self.selected_index += 1;
        }
    }

    // ============ 表单相关 ============

    /// 打开表单弹窗（草稿与编辑状态保持原样）
    pub fn open_form(&mut self) {
        self.mode = AppMode::Form;
        self.form_field = FormField::Title;
        self.message = None;
    }

    /// 开始编辑选中的文章：把字段拷贝进草稿并进入编辑模式
    pub fn start_edit_post(&mut self) {
        if let Some(post) = self.selected_post() {
            let id = post.post_id;
            let title = post.title.clone();
            let body = post.body.clone();
            self.draft.title = title;
            self.draft.body = body;
            self.is_editing = true;
            self.edit_id = Some(id);
            self.mode = AppMode::Form;
            self.form_field = FormField::Title;
            self.message = None;
        }
    }

    /// 提交表单：编辑模式走 Update，否则走 Create
    pub fn submit_form(&mut self) {
        if !self.draft.is_complete() {
            self.message = Some("Title and body are required".to_string());
            return;
        }
        if self.is_editing {
            self.update_post();
        } else {
            self.create_post();
        }
    }

    /// 关闭弹窗
    ///
    /// 不清除草稿和编辑状态：编辑模式只能由成功的 Update 退出。
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }

    // ============ 删除相关 ============

    /// 开始删除选中的文章
    pub fn start_delete_post(&mut self) {
        if let Some(post) = self.selected_post() {
            let id = post.post_id;
            self.mode = AppMode::ConfirmDelete(id);
        }
    }

    // ============ 四个网络操作 ============
    //
    // 每个操作独立地在入口设置 is_loading 并清除上一次的错误，
    // 在出口（无论成败）清除 is_loading。

    /// 拉取全部文章：成功则整体替换本地列表，失败保持原列表
    pub fn fetch_posts(&mut self) {
        self.is_loading = true;
        self.last_error = None;
        match self.api.list_posts() {
            Ok(posts) => {
                self.posts = posts;
                self.clamp_selection();
            }
            Err(err) => self.last_error = Some(err),
        }
        self.is_loading = false;
    }

    /// 创建文章
    pub fn create_post(&mut self) {
        self.is_loading = true;
        self.last_error = None;
        match self.api.create_post(&self.draft) {
            Ok(mut post) => {
                // 沿用原实现：无视服务端分配的 id，按本地长度顺延编号
                post.post_id = self.posts.len() as u64 + 1;
                self.posts.push(post);
                self.draft.clear();
                self.mode = AppMode::Normal;
                self.message = Some("Post created".to_string());
            }
            Err(err) => self.last_error = Some(err),
        }
        self.is_loading = false;
    }

    /// 更新文章
    ///
    /// 没有 edit_id 时不发请求，也不触碰任何状态。
    pub fn update_post(&mut self) {
        let Some(edit_id) = self.edit_id else {
            return;
        };
        self.is_loading = true;
        self.last_error = None;
        match self.api.update_post(edit_id, &self.draft) {
            Ok(updated) => {
                for post in &mut self.posts {
                    if post.post_id == edit_id {
                        *post = updated.clone();
                    }
                }
                self.draft.clear();
                self.is_editing = false;
                self.edit_id = None;
                self.mode = AppMode::Normal;
                self.message = Some("Post updated".to_string());
            }
            Err(err) => self.last_error = Some(err),
        }
        self.is_loading = false;
    }

    /// 删除文章
    pub fn delete_post(&mut self, id: u64) {
        self.is_loading = true;
        self.last_error = None;
        match self.api.delete_post(id) {
            Ok(()) => {
                self.posts.retain(|post| post.post_id != id);
                self.clamp_selection();
                self.message = Some("Post deleted".to_string());
            }
            Err(err) => self.last_error = Some(err),
        }
        self.is_loading = false;
    }
}
