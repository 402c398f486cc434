//! UI 模块，按 MVI (Model-View-Intent) 组织
//!
//! - Model (state.rs): App 持有文章缓存、表单草稿和请求状态
//! - Intent (actions.rs / input.rs): 按键映射为语义化 Action
//! - Update (logic.rs): dispatch 执行四个网络操作的状态同步规则
//! - View (view/): 纯函数，把 App 状态画成列表、表单和加载/错误视图

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
