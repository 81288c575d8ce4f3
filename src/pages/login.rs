use crate::api;
use crate::components::use_app_context;
use crate::models::SessionUser;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let nav = use_navigator();
    let app_ctx = use_app_context();
    let mut current_user = app_ctx.current_user;

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let user_id_val = user_id.read().clone();
        let pwd_val = password.read().clone();

        if user_id_val.is_empty() || pwd_val.is_empty() {
            error.set(Some("请输入用户名和密码".to_string()));
            return;
        }

        spawn(async move {
            match api::login(user_id_val.clone(), pwd_val).await {
                Ok(login_resp) => {
                    current_user.set(Some(SessionUser {
                        user_id: login_resp.user_id.clone(),
                    }));
                    error.set(None);
                    info!("用户 {} 登录成功", login_resp.user_id);
                    user_id.set(String::new());
                    password.set(String::new());

                    nav.push(crate::Route::Home {});
                }
                Err(e) => {
                    error.set(Some(format!("登录失败: {}", e)));
                    error!("登录异常: {e}");
                }
            }
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "form-container",
                h1 { "用户登录" }

                form { onsubmit: on_submit,
                    div { class: "form-group",
                        label { r#for: "user_id", "用户名：" }
                        input {
                            r#type: "text",
                            id: "user_id",
                            name: "user_id",
                            placeholder: "请输入用户名",
                            value: "{user_id}",
                            oninput: move |evt| user_id.set(evt.value().clone())
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "密码：" }
                        input {
                            r#type: "password",
                            id: "password",
                            name: "password",
                            placeholder: "请输入密码",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value().clone())
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "error-message", "{err}" }
                    }

                    div { class: "form-actions",
                        button { r#type: "submit", class: "btn-primary", "登录" }
                        Link { to: crate::Route::Register {},
                            button { r#type: "button", class: "btn-secondary", "注册账号" }
                        }
                    }
                }
            }
        }
    }
}
