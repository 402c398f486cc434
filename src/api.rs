//! 远端 posts API 边界
//!
//! 四个网络操作都经过 [`PostsApi`] 这一层接口，
//! 方便在测试中用脚本化实现替换真实 HTTP 客户端。

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Post, PostDraft};

pub type ApiResult<T> = Result<T, ApiError>;

/// API 错误分类
///
/// 内部保留结构化信息，界面上仍然统一显示为一条通用错误消息。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 网络不可达、连接中断等传输层错误
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 服务端返回非 2xx 状态码
    #[error("server responded with status {0}")]
    Http(u16),

    /// 响应体不是预期的 JSON
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// posts 资源的四个操作
pub trait PostsApi {
    /// 拉取全部文章
    fn list_posts(&self) -> ApiResult<Vec<Post>>;

    /// 创建文章，返回服务端生成的 Post
    fn create_post(&self, draft: &PostDraft) -> ApiResult<Post>;

    /// 更新指定文章，返回服务端的最新 Post
    fn update_post(&self, id: u64, draft: &PostDraft) -> ApiResult<Post>;

    /// 删除指定文章，响应体忽略
    fn delete_post(&self, id: u64) -> ApiResult<()>;
}

/// 基于 reqwest 的阻塞式客户端
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        // 不设超时：请求一直等到服务端应答或连接失败
        let http = Client::builder().timeout(None).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn ensure_success(response: Response) -> ApiResult<Response> {
        if !response.status().is_success() {
            return Err(ApiError::Http(response.status().as_u16()));
        }
        Ok(response)
    }

    fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = Self::ensure_success(response)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl PostsApi for ApiClient {
    fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let response = self.http.get(format!("{}/posts", self.base_url)).send()?;
        Self::parse_json(response)
    }

    fn create_post(&self, draft: &PostDraft) -> ApiResult<Post> {
        let response = self
            .http
            .post(format!("{}/posts", self.base_url))
            .json(draft)
            .send()?;
        Self::parse_json(response)
    }

    fn update_post(&self, id: u64, draft: &PostDraft) -> ApiResult<Post> {
        let response = self
            .http
            .put(format!("{}/posts/{}", self.base_url, id))
            .query(&[("userId", "1")])
            .json(draft)
            .send()?;
        Self::parse_json(response)
    }

    fn delete_post(&self, id: u64) -> ApiResult<()> {
        let response = self
            .http
            .delete(format!("{}/posts/{}", self.base_url, id))
            .send()?;
        Self::ensure_success(response)?;
        Ok(())
    }
}
