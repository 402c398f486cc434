use serde::{Deserialize, Serialize};

/// 远端 posts 资源中的一篇文章
///
/// 服务端是唯一权威，本地持有的是可能过期的缓存副本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// 表单草稿：未提交的标题 / 正文
///
/// 序列化后即为 Create / Update 的请求体 `{title, body}`。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_wire_names() {
        let json = r#"[{"postId":1,"title":"A","body":"a","userId":7}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post_id, 1);
        assert_eq!(posts[0].title, "A");
        assert_eq!(posts[0].body, "a");
        assert_eq!(posts[0].user_id, Some(7));
    }

    #[test]
    fn test_post_missing_optional_fields() {
        let json = r#"{"postId":3,"title":"no body"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.post_id, 3);
        assert_eq!(post.body, "");
        assert_eq!(post.user_id, None);
    }

    #[test]
    fn test_draft_serializes_to_title_and_body_only() {
        let draft = PostDraft {
            title: "T".to_string(),
            body: "B".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json, serde_json::json!({"title": "T", "body": "B"}));
    }

    #[test]
    fn test_draft_is_complete() {
        let mut draft = PostDraft::default();
        assert!(!draft.is_complete());

        draft.title = "T".to_string();
        assert!(!draft.is_complete());

        draft.body = "B".to_string();
        assert!(draft.is_complete());

        draft.clear();
        assert!(!draft.is_complete());
    }
}
