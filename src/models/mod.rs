use serde::{Deserialize, Serialize};

/// 后端的User模型，注册和登录接口都收这个载荷。
/// image是预留的头像字段，前端目前没有对应的上传入口。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub password: String,
}

/// 登录后保存在前端的会话用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // 注册载荷必须和后端schema逐字段对上，确认密码不上送
    #[test]
    fn user_payload_matches_backend_schema() {
        let user = User {
            user_id: "alice".to_string(),
            name: "앨리스".to_string(),
            email: "alice@example.com".to_string(),
            image: String::new(),
            password: "pw123".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert_eq!(object["user_id"], "alice");
        assert_eq!(object["name"], "앨리스");
        assert_eq!(object["email"], "alice@example.com");
        assert_eq!(object["image"], "");
        assert_eq!(object["password"], "pw123");
        assert!(!object.contains_key("confirm_password"));
    }
}
