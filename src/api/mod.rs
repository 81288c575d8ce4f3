use crate::models::User;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::window;

const API_BASE_URL: &str = "http://127.0.0.1:8000";
const TOKEN_KEY: &str = "access_token";

/// 从localStorage获取访问token
pub fn get_token() -> Option<String> {
    let window = window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

/// 保存访问token到localStorage
pub fn set_token(token: &str) -> Result<(), String> {
    let window = window().ok_or("无法获取window对象")?;
    let storage = window
        .local_storage()
        .map_err(|_| "无法访问localStorage")?
        .ok_or("localStorage不可用")?;
    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| "无法保存token")?;
    Ok(())
}

/// 清除访问token
pub fn clear_token() -> Result<(), String> {
    let window = window().ok_or("无法获取window对象")?;
    let storage = window
        .local_storage()
        .map_err(|_| "无法访问localStorage")?
        .ok_or("localStorage不可用")?;
    storage
        .remove_item(TOKEN_KEY)
        .map_err(|_| "无法删除token")?;
    Ok(())
}

/// 错误响应（FastAPI把错误信息放在detail字段）
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ============ 注册 ============

/// 注册提交：接收注册表单七个字段的当前快照，结果只通过set_error回传。
/// 两次密码的一致性检查在这里做，表单组件本身不做任何校验。
#[allow(clippy::too_many_arguments)]
pub async fn handle_submit(
    user_id: String,
    name: String,
    email: String,
    image: String,
    password: String,
    confirm_password: String,
    mut set_error: impl FnMut(String),
) {
    if password != confirm_password {
        set_error("两次输入的密码不一致".to_string());
        return;
    }

    let user = User {
        user_id,
        name,
        email,
        image,
        password,
    };

    match sign_up(&user).await {
        Ok(()) => set_error(String::new()),
        Err(e) => set_error(e),
    }
}

/// 调用注册接口
pub async fn sign_up(user: &User) -> Result<(), String> {
    let response = Request::post(&format!("{}/user/sign_up", API_BASE_URL))
        .json(user)
        .map_err(|e| format!("序列化请求失败: {}", e))?
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        let error: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
            detail: "注册失败".to_string(),
        });
        Err(error.detail)
    }
}

// ============ 登录 ============

#[derive(Debug, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub token: Token,
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user_id: String,
}

/// 登录，成功后把token写入localStorage
pub async fn login(user_id: String, password: String) -> Result<LoginResponse, String> {
    // 后端的User模型要求所有字段都在，登录时其余字段传空串
    let user = User {
        user_id,
        password,
        name: String::new(),
        email: String::new(),
        image: String::new(),
    };

    let response = Request::post(&format!("{}/token", API_BASE_URL))
        .json(&user)
        .map_err(|e| format!("序列化请求失败: {}", e))?
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.ok() {
        let login_resp: LoginResponse = response
            .json()
            .await
            .map_err(|e| format!("解析响应失败: {}", e))?;

        set_token(&login_resp.token.access_token)?;

        Ok(login_resp)
    } else {
        let error: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
            detail: "登录失败".to_string(),
        });
        Err(error.detail)
    }
}

/// 获取当前登录用户
pub async fn get_profile() -> Result<String, String> {
    let token = get_token().ok_or("未登录")?;

    let response = Request::get(&format!("{}/user/me", API_BASE_URL))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.ok() {
        let me: MeResponse = response
            .json()
            .await
            .map_err(|e| format!("解析响应失败: {}", e))?;
        Ok(me.user_id)
    } else {
        let error: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
            detail: "获取用户信息失败".to_string(),
        });
        Err(error.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn error_response_reads_fastapi_detail() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"detail":"User ID already exists"}"#).unwrap();
        assert_eq!(error.detail, "User ID already exists");
    }

    #[test]
    fn handle_submit_reports_password_mismatch_without_request() {
        let messages = RefCell::new(Vec::new());

        // 密码不一致时在发请求之前就返回，所以在非wasm环境下也能跑通
        futures::executor::block_on(handle_submit(
            "alice".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "pw123".to_string(),
            "pw124".to_string(),
            |msg| messages.borrow_mut().push(msg),
        ));

        assert_eq!(messages.borrow().as_slice(), ["两次输入的密码不一致"]);
    }

    #[test]
    fn login_response_parses_nested_token() {
        let login_resp: LoginResponse = serde_json::from_str(
            r#"{"user_id":"alice","token":{"access_token":"abc","token_type":"bearer"}}"#,
        )
        .unwrap();
        assert_eq!(login_resp.user_id, "alice");
        assert_eq!(login_resp.token.token_type, "bearer");
        assert_eq!(login_resp.token.access_token, "abc");
    }
}
