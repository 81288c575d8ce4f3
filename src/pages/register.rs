use crate::api;
use dioxus::prelude::*;

/// 注册表单。这里只持有字段状态并把提交转发给api::handle_submit，
/// 校验和错误文案都由后者负责，错误通过error信号回显。
#[component]
pub fn Register() -> Element {
    let mut user_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    // image暂时没有对应的上传控件，提交时始终为空串
    let image = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(String::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let user_id_val = user_id.read().clone();
        let name_val = name.read().clone();
        let email_val = email.read().clone();
        let image_val = image.read().clone();
        let pwd_val = password.read().clone();
        let confirm_pwd = confirm_password.read().clone();

        // 提交期间不锁表单也不禁用按钮，字段保持可编辑
        spawn(async move {
            api::handle_submit(
                user_id_val,
                name_val,
                email_val,
                image_val,
                pwd_val,
                confirm_pwd,
                move |msg| error.set(msg),
            )
            .await;
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "form-container",
                h1 { "用户注册" }

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

                    div { class: "form-group",
                        label { r#for: "confirm_password", "确认密码：" }
                        input {
                            r#type: "password",
                            id: "confirm_password",
                            name: "confirm_password",
                            placeholder: "请再次输入密码",
                            value: "{confirm_password}",
                            oninput: move |evt| confirm_password.set(evt.value().clone())
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "name", "昵称：" }
                        input {
                            r#type: "text",
                            id: "name",
                            name: "name",
                            placeholder: "请输入昵称",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value().clone())
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "email", "邮箱：" }
                        input {
                            r#type: "text",
                            id: "email",
                            name: "email",
                            placeholder: "请输入邮箱",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value().clone())
                        }
                    }

                    if !error.read().is_empty() {
                        div { class: "error-message", "{error}" }
                    }

                    div { class: "form-actions",
                        button { r#type: "submit", class: "btn-primary", "注册" }
                        Link { to: crate::Route::Login {},
                            button { r#type: "button", class: "btn-secondary", "返回登录" }
                        }
                    }
                }
            }
        }
    }
}
